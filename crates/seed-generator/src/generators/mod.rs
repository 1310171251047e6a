//! Individual value generators.
//!
//! Each function draws from the RNG it is given; none of them touch global
//! randomness or the system clock.

pub mod date;
pub mod numeric;
pub mod text;

pub use date::{
    generate_birth_date, generate_date_between, generate_datetime_between, generate_time_of_day,
    start_of_year,
};
pub use numeric::{generate_count, generate_int_range};
pub use text::{generate_filler_text, generate_first_name, generate_last_name};
