use std::error::Error;

use serde::Serialize;

use crate::stats::aggregate::Aggregated;

/// Everything the client-side chart needs, embedded as inline JSON.
#[derive(Serialize)]
pub struct Payload<'a> {
    pub repo: &'a str,
    pub primary: &'a str,
    pub secondary: &'a str,
    pub complete: bool,
    pub generated: String,
    pub counts: &'a Aggregated,
}

const TEMPLATE: &str = r#"<!doctype html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>tenure — __REPO__</title>
<style>
  body { font-family: sans-serif; margin: 2rem; color: #222; }
  h1 { font-size: 1.3rem; }
  .incomplete { color: #b00; }
  table { border-collapse: collapse; margin-top: 1rem; }
  td, th { border: 1px solid #ccc; padding: 0.25rem 0.6rem; text-align: left; }
</style>
</head>
<body>
<h1>tenure — <span id="repo"></span></h1>
<p id="meta"></p>
<div id="chart"><table id="fallback"></table></div>
<script id="data" type="application/json">__DATA__</script>
<script>
  const data = JSON.parse(document.getElementById("data").textContent);
  document.getElementById("repo").textContent = data.repo;
  const meta = document.getElementById("meta");
  meta.textContent = data.primary + " \u00d7 " + data.secondary +
    " \u2014 " + data.counts.rows + " lines, generated " + data.generated;
  if (!data.complete) {
    meta.textContent += " (incomplete run)";
    meta.className = "incomplete";
  }
  // Chart rendering is the embedding page's concern; the fallback
  // table just proves the payload is readable.
  const table = document.getElementById("fallback");
  table.innerHTML = "<tr><th>" + data.primary + "</th><th>" +
    data.secondary + "</th><th>lines</th></tr>";
  for (const [p, inner] of Object.entries(data.counts.counts)) {
    for (const [s, n] of Object.entries(inner)) {
      const row = table.insertRow();
      row.insertCell().textContent = p;
      row.insertCell().textContent = s;
      row.insertCell().textContent = n;
    }
  }
</script>
</body>
</html>
"#;

/// Render the report document. The JSON payload escapes `<` so user
/// content (author names, paths) can never terminate the script tag.
pub fn render(payload: &Payload) -> Result<String, Box<dyn Error>> {
    let json = serde_json::to_string(payload)?.replace('<', "\\u003c");
    Ok(TEMPLATE
        .replace("__REPO__", &escape(payload.repo))
        .replace("__DATA__", &json))
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;")
}
