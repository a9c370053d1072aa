/// Starter suite written by `waypoint init`.
pub(crate) const STARTER_SUITE: &str = r#"# Waypoint suite: one target page, one navigational element, many viewports.

[manifest]
id = "example-home-page"
name = "Example Home Page Test"
description = "Tests navigation from the home page to the documentation page"

[target]
url = "https://example.com"
nav_selector = "a[href*='iana.org']"
title_pattern = "Example Domain"
destination_url_pattern = "iana\\.org"
# page_load_timeout_ms = 10000
# settle_delay_ms = 1000
# settle = "document-ready"
home_stage = "home-page"
destination_stage = "destination-page"

[capture]
enabled = true

[[viewports]]
name = "desktop"
width = 1600
height = 900

[[viewports]]
name = "tablet"
width = 1024
height = 768

[[viewports]]
name = "phone"
width = 360
height = 640
"#;
