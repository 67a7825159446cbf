//! Dashboard page composition.
//!
//! The page is rendered once at startup from an embedded template: a
//! heading, the pre-rendered map, the LGA dropdown and an empty bar-chart
//! placeholder that the page script fills from `/api/bar-chart`.

use accident_map_figure_models::Figure;

/// Page heading and document title.
pub const PAGE_TITLE: &str = "Accident Data Visualization";

/// Dropdown selection before the user picks anything.
pub const DEFAULT_LGA: &str = "ALPINE";

/// Plotly.js bundle loaded by the page.
pub const PLOTLY_SRC: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

static PAGE_TEMPLATE: &str = include_str!("../assets/index.html");

/// Inputs for [`compose_page`].
pub struct PageContext<'a> {
    /// Dropdown options, in display order.
    pub lga_names: &'a [&'a str],
    /// Initially selected option. Listed first when missing from `lga_names`.
    pub default_lga: &'a str,
    /// Map figure embedded in the page.
    pub map: &'a Figure,
}

/// Renders the dashboard HTML.
///
/// # Errors
///
/// Returns an error if the map figure fails to serialize.
pub fn compose_page(ctx: &PageContext<'_>) -> Result<String, serde_json::Error> {
    let map_json = script_safe(&serde_json::to_string(ctx.map)?);
    let default_json = script_safe(&serde_json::to_string(ctx.default_lga)?);

    let mut options = Vec::with_capacity(ctx.lga_names.len() + 1);
    if !ctx.lga_names.contains(&ctx.default_lga) {
        options.push(option_tag(ctx.default_lga, true));
    }
    options.extend(
        ctx.lga_names
            .iter()
            .map(|name| option_tag(name, *name == ctx.default_lga)),
    );
    let options = options.join("\n");

    Ok(PAGE_TEMPLATE
        .replace("{{TITLE}}", PAGE_TITLE)
        .replace("{{PLOTLY_SRC}}", PLOTLY_SRC)
        .replace("{{LGA_OPTIONS}}", &options)
        .replace("{{DEFAULT_LGA}}", &default_json)
        .replace("{{MAP_FIGURE}}", &map_json))
}

/// One dropdown `<option>` line.
fn option_tag(name: &str, selected: bool) -> String {
    let escaped = escape_html(name);
    let selected = if selected { " selected" } else { "" };
    format!("          <option value=\"{escaped}\"{selected}>{escaped}</option>")
}

/// Escapes text for HTML element content and quoted attributes.
fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Keeps serialized JSON from closing the surrounding `<script>` element.
fn script_safe(json: &str) -> String {
    json.replace('<', "\\u003c")
}

#[cfg(test)]
mod tests {
    use accident_map_figure_models::Layout;

    use super::*;

    fn empty_map() -> Figure {
        Figure {
            data: vec![],
            layout: Layout::default(),
        }
    }

    #[test]
    fn page_has_heading_map_dropdown_and_placeholder() {
        let map = empty_map();
        let html = compose_page(&PageContext {
            lga_names: &["YARRA", "ALPINE", "BALLARAT"],
            default_lga: DEFAULT_LGA,
            map: &map,
        })
        .unwrap();

        assert!(html.contains("<h1>Accident Data Visualization</h1>"));
        assert!(html.contains(r#"<div id="map" class="graph"></div>"#));
        assert!(html.contains("Select LGA:"));
        assert!(html.contains(r#"<div id="bar-chart" class="graph"></div>"#));
        assert!(html.contains(r#"const mapFigure = {"data":[],"layout":{}};"#));
        assert!(html.contains(r#"updateBarChart("ALPINE");"#));
        assert!(!html.contains("{{"));
    }

    #[test]
    fn options_keep_source_order_and_mark_default() {
        let map = empty_map();
        let html = compose_page(&PageContext {
            lga_names: &["YARRA", "ALPINE", "BALLARAT"],
            default_lga: "ALPINE",
            map: &map,
        })
        .unwrap();

        let yarra = html.find(r#"value="YARRA">"#).unwrap();
        let alpine = html.find(r#"value="ALPINE" selected>"#).unwrap();
        let ballarat = html.find(r#"value="BALLARAT">"#).unwrap();
        assert!(yarra < alpine && alpine < ballarat);
        assert_eq!(html.matches(" selected>").count(), 1);
    }

    #[test]
    fn missing_default_is_listed_first_and_selected() {
        let map = empty_map();
        let html = compose_page(&PageContext {
            lga_names: &["YARRA", "BALLARAT"],
            default_lga: "ALPINE",
            map: &map,
        })
        .unwrap();

        let alpine = html.find(r#"<option value="ALPINE" selected>ALPINE</option>"#).unwrap();
        let yarra = html.find(r#"<option value="YARRA">YARRA</option>"#).unwrap();
        let ballarat = html.find(r#"<option value="BALLARAT">BALLARAT</option>"#).unwrap();
        assert!(alpine < yarra && yarra < ballarat);
        assert_eq!(html.matches(" selected>").count(), 1);
        assert!(html.contains(r#"updateBarChart("ALPINE");"#));
    }

    #[test]
    fn escapes_names_and_script_content() {
        let map = empty_map();
        let html = compose_page(&PageContext {
            lga_names: &["A&B <C>"],
            default_lga: "</script>",
            map: &map,
        })
        .unwrap();

        assert!(html.contains(
            r#"<option value="A&amp;B &lt;C&gt;">A&amp;B &lt;C&gt;</option>"#
        ));
        assert!(html.contains(r#"updateBarChart("\u003c/script>");"#));
        assert_eq!(html.matches("</script>").count(), 2);
    }
}
