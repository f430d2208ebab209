//! HTML templates for the license request page.
//!
//! Uses a simple format!-based template approach; the page is self-contained.

use keymint_catalog::Plugin;

/// Default licensee/assignee shown in the form.
pub const DEFAULT_LICENSEE: &str = "Evaluator";

/// Default expiry date offered for product entitlements.
pub const DEFAULT_EXPIRY: &str = "2099-12-31";

/// Base HTML layout wrapper.
fn layout(title: &str, content: &str) -> String {
    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title} - Keymint</title>
    <style>
        body {{ font-family: system-ui, sans-serif; max-width: 52rem; margin: 2rem auto; padding: 0 1rem; }}
        ul.plugins {{ list-style: none; padding: 0; display: grid; grid-template-columns: repeat(auto-fill, minmax(14rem, 1fr)); gap: .25rem; }}
        label {{ display: block; margin: .5rem 0 .25rem; }}
        input[type=text], input[type=date] {{ width: 100%; padding: .4rem; }}
        button {{ margin-top: 1rem; padding: .5rem 1.5rem; }}
        pre {{ white-space: pre-wrap; word-break: break-all; background: #f4f4f4; padding: 1rem; }}
    </style>
</head>
<body>
    <h1>{title}</h1>
    {content}
    <script>
        document.getElementById('license-form').addEventListener('submit', async (e) => {{
            e.preventDefault();
            const form = e.target;
            const products = [...form.querySelectorAll('input[name=product]:checked')].map(cb => ({{
                code: cb.value,
                fallbackDate: form.expiryDate.value,
                paidUpTo: form.expiryDate.value,
                extended: false,
            }}));
            const body = {{
                licenseeName: form.licenseeName.value,
                assigneeName: form.assigneeName.value,
                products,
            }};
            const resp = await fetch('/generateLicense', {{
                method: 'POST',
                headers: {{ 'Content-Type': 'application/json' }},
                body: JSON.stringify(body),
            }});
            const data = await resp.json();
            document.getElementById('result').textContent = data.license ?? data.error;
        }});
    </script>
</body>
</html>"##
    )
}

/// Render the index page with the current plugin catalog.
pub fn index_page(plugins: &[Plugin]) -> String {
    let plugin_items: String = plugins
        .iter()
        .filter(|p| !p.code.is_empty())
        .map(|p| {
            format!(
                r#"<li><label><input type="checkbox" name="product" value="{code}"> {name}</label></li>"#,
                code = escape(&p.code),
                name = escape(&p.name),
            )
        })
        .collect();

    let content = format!(
        r#"<form id="license-form">
    <label for="licenseeName">Licensee</label>
    <input type="text" id="licenseeName" name="licenseeName" value="{licensee}">
    <label for="assigneeName">Assignee</label>
    <input type="text" id="assigneeName" name="assigneeName" value="{licensee}">
    <label for="expiryDate">Paid up to</label>
    <input type="date" id="expiryDate" name="expiryDate" value="{expiry}">
    <h2>Products</h2>
    <ul class="plugins">{plugin_items}</ul>
    <button type="submit">Generate license</button>
</form>
<pre id="result"></pre>"#,
        licensee = DEFAULT_LICENSEE,
        expiry = DEFAULT_EXPIRY,
    );

    layout("Select products", &content)
}

fn escape(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
