//! Figure export.
//!
//! The JSON form is the bare plotly figure. The HTML form is a single page
//! that pulls plotly.js from its CDN and animates the embedded figure.

use std::fs;
use std::path::Path;

use crate::api::figure::Figure;
use crate::error::TrajectoryResult;

const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

/// Output file flavour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Json,
    Html,
}

impl ExportFormat {
    /// Guess the format from a file extension, JSON unless it says HTML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("html") || ext.eq_ignore_ascii_case("htm") => {
                ExportFormat::Html
            }
            _ => ExportFormat::Json,
        }
    }
}

/// Render the figure as pretty JSON.
pub fn render_json(figure: &Figure) -> TrajectoryResult<String> {
    Ok(serde_json::to_string_pretty(figure)?)
}

/// Render a standalone HTML page that plays the figure.
pub fn render_html(figure: &Figure) -> TrajectoryResult<String> {
    // keep a literal "</script>" inside string data from closing the tag
    let payload = serde_json::to_string(figure)?.replace("</", "<\\/");
    let title = escape_html(&figure.layout.title.text);

    Ok(format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>{title}</title>
<script src="{cdn}"></script>
</head>
<body>
<div id="chart" style="width:100%;height:100vh;"></div>
<script>
const figure = {payload};
Plotly.newPlot("chart", figure.data, figure.layout).then(function () {{
  Plotly.addFrames("chart", figure.frames);
}});
</script>
</body>
</html>
"#,
        title = title,
        cdn = PLOTLY_CDN,
        payload = payload,
    ))
}

/// Write the figure to `path` in the requested format.
pub fn write_figure(figure: &Figure, path: &Path, format: ExportFormat) -> TrajectoryResult<()> {
    let content = match format {
        ExportFormat::Json => render_json(figure)?,
        ExportFormat::Html => render_html(figure)?,
    };
    fs::write(path, content)?;
    log::info!("Wrote {} frames to {}", figure.frames.len(), path.display());
    Ok(())
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::figure::build_figure;
    use crate::api::types::ChartSpec;
    use crate::config::ChartConfig;
    use tempfile::tempdir;

    fn figure(title: &str) -> Figure {
        let mut config = ChartConfig::default();
        config.layout.title = title.to_string();
        build_figure(&ChartSpec::default(), &config)
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(ExportFormat::from_path(Path::new("out.HTML")), ExportFormat::Html);
        assert_eq!(ExportFormat::from_path(Path::new("out.json")), ExportFormat::Json);
        assert_eq!(ExportFormat::from_path(Path::new("out")), ExportFormat::Json);
    }

    #[test]
    fn test_html_escapes_title_and_script_end() {
        let html = render_html(&figure("Cases </script> & <b>")).unwrap();
        assert!(html.contains("<title>Cases &lt;/script&gt; &amp; &lt;b&gt;</title>"));
        assert_eq!(html.matches("</script>").count(), 2);
        assert!(html.contains("Plotly.addFrames"));
    }

    #[test]
    fn test_write_json_round_trips_as_value() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("figure.json");
        write_figure(&figure("T"), &path, ExportFormat::Json).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["layout"]["title"]["text"], "T");
        assert!(value["frames"].as_array().unwrap().is_empty());
    }
}
