//! Network access from the browser to the site's JSON API.

pub mod api;
