mod drills;
mod forecast;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use drills::TrainingDrills;
pub use forecast::ForecastView;
