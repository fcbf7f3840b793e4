pub mod blood_glucose;
pub mod blood_pressure;
pub mod heart_rate;
pub mod oxygen_saturation;
pub mod pain;
pub mod respiratory_rate;
pub mod temperature;
pub mod weight;
