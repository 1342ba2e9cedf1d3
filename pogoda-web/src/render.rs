//! HTML rendering of the forecast page.
//!
//! The page is simple enough that a template engine would be overhead: one
//! form, one current-conditions block, one hourly table.

use pogoda_core::ForecastPage;

/// Render the full page for one request outcome. Always produces a complete
/// document; failures show up as an inline message above the form.
pub fn page(page: &ForecastPage) -> String {
    let mut body = String::new();

    body.push_str("<h1>Прогноз погоды</h1>\n");
    body.push_str(&format!(
        "<form method=\"post\" action=\"/\">\
         <input type=\"text\" name=\"city\" value=\"{}\" placeholder=\"Город\">\
         <button type=\"submit\">Показать</button></form>\n",
        escape(&page.city)
    ));

    if let Some(error) = &page.error {
        body.push_str(&format!("<p class=\"error\">{}</p>\n", escape(error)));
    }

    if let Some(weather) = &page.weather {
        body.push_str(&format!(
            "<h2>{} {}</h2>\n<p>Сейчас: {}&deg;C, ветер {} км/ч</p>\n",
            weather.dominant_icon.glyph(),
            escape(&weather.city),
            weather.current_temperature,
            weather.current_windspeed,
        ));

        body.push_str("<table><tr><th>Время</th><th>Температура</th><th></th></tr>\n");
        for point in &weather.hourly {
            body.push_str(&format!(
                "<tr><td>{}</td><td>{}&deg;C</td><td>{}</td></tr>\n",
                escape(&point.time),
                point.temperature,
                point.icon.glyph(),
            ));
        }
        body.push_str("</table>\n");
    }

    format!(
        "<!DOCTYPE html>\n<html lang=\"ru\">\n<head><meta charset=\"utf-8\">\
         <title>Прогноз погоды</title></head>\n<body>\n{body}</body>\n</html>\n"
    )
}

/// Escape text for interpolation into HTML element and attribute content.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
