pub mod use_availability;
