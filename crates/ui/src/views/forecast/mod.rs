mod actions;
mod view;

pub use view::ForecastView;

#[cfg(test)]
pub(crate) use view::{ResultsSection, ResultsSectionProps};
