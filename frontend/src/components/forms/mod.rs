pub mod contact_step;
pub mod job_details_step;
pub mod zipcode_step;
