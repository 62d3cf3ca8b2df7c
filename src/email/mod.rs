//! E-mail address synthesis and validation, built on the domain builder.

mod generator;
mod validator;

pub use generator::{
    feasible_bound, generate, EmailOptions, EMAIL_BOUND, IP_EMAIL_BOUND, LOCAL_PART_BOUND,
};
pub use validator::validate;
