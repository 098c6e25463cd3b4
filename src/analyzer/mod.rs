// Analyzer module: the pure time-series core. Every function is total over
// its input and returns a new sequence, never mutating what it was given.

pub mod forecast;
pub mod seasonality;
pub mod series;
pub mod trend;

pub use forecast::forecast;
pub use seasonality::{SeasonalPattern, detect_seasonality};
pub use series::{Metric, TimeSeriesPoint, extract_time_series, moving_average};
pub use trend::{TrendAnalysis, TrendDirection, linear_regression};
