pub mod bands;
pub mod fuzzer;
pub mod noise;
