/// Essential raw columns; a row missing any of these is dropped
pub const COL_NAME: &str = "name";
pub const COL_MASS: &str = "mass";
pub const COL_YEAR: &str = "year";
pub const COL_RECLAT: &str = "reclat";
pub const COL_RECLONG: &str = "reclong";
pub const COL_COUNTRY: &str = "country";
pub const COL_MASS_CATEGORY: &str = "mass_category";

/// Default file layout
pub const RAW_LANDINGS_FILE: &str = "data/meteorite-landings.csv";
pub const CLEANED_LANDINGS_FILE: &str = "data/landings-cleaned.csv";
pub const OUTPUTS_DIR: &str = "outputs";
pub const COUNTRY_COUNT_CHART: &str = "meteorites-by-country.png";
pub const MEAN_MASS_CHART: &str = "mean-mass-by-country.png";
pub const YEARLY_COUNT_CHART: &str = "meteorites-by-year.png";
pub const SUMMARY_FILE: &str = "analysis-summary.json";

/// Observation window (50 years up to 2013)
pub const MIN_YEAR: i32 = 1963;
pub const MAX_YEAR: i32 = 2013;

/// Coordinate bounds
pub const MIN_LATITUDE: f64 = -90.0;
pub const MAX_LATITUDE: f64 = 90.0;
pub const MIN_LONGITUDE: f64 = -180.0;
pub const MAX_LONGITUDE: f64 = 180.0;

/// Polar overrides: south of this is Antarctica, north of this is Arctic Ocean
pub const ANTARCTIC_LATITUDE_LIMIT: f64 = -60.0;
pub const ARCTIC_LATITUDE_LIMIT: f64 = 75.0;

/// Mass category boundaries in grams, half-open on the lower bound
pub const MASS_SMALL_LIMIT: f64 = 10.0;
pub const MASS_MEDIUM_LIMIT: f64 = 100.0;
pub const MASS_LARGE_LIMIT: f64 = 1000.0;

/// Reporting defaults
pub const TOP_COUNTRIES: usize = 20;
pub const TOP_CONSOLE_ROWS: usize = 10;
pub const PEAK_YEARS_ANNOTATED: usize = 3;
pub const PEAK_YEARS_PRINTED: usize = 5;

/// Chart resolution
pub const CHART_WIDTH: u32 = 1400;
pub const CHART_HEIGHT: u32 = 800;
