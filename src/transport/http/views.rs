//! Askama template bindings for the rendered pages.
//!
//! Each struct guarantees which keys its view receives; the templates live
//! under `templates/` and share `base.html`.

use askama::Template;

use crate::domain::location::LocationEntry;
use crate::domain::record::RecordSet;

#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub page_title: &'static str,
    pub locations: &'static [LocationEntry],
}

#[derive(Template)]
#[template(path = "city_weather.html")]
pub struct CityWeatherTemplate<'a> {
    pub page_title: String,
    pub location_code: &'a str,
    pub location_name: &'a str,
    pub records: &'a RecordSet,
}

#[derive(Template)]
#[template(path = "monthly_summary.html")]
pub struct MonthlySummaryTemplate<'a> {
    pub page_title: &'static str,
    pub records: &'a RecordSet,
}
