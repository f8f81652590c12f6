//! Snippets that call a function from other languages

use lunar_api::HttpMethod;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CodeLanguage {
    #[default]
    Curl,
    JavaScript,
    Python,
    Go,
}

impl CodeLanguage {
    pub const ALL: [CodeLanguage; 4] = [
        CodeLanguage::Curl,
        CodeLanguage::JavaScript,
        CodeLanguage::Python,
        CodeLanguage::Go,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            CodeLanguage::Curl => "cURL",
            CodeLanguage::JavaScript => "JavaScript (fetch)",
            CodeLanguage::Python => "Python (requests)",
            CodeLanguage::Go => "Go (net/http)",
        }
    }

    pub fn next(&self) -> Self {
        let idx = Self::ALL.iter().position(|l| l == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }
}

/// Build a snippet invoking `url` with `method`.
///
/// The body is only used for methods that carry one.
pub fn generate(language: CodeLanguage, method: HttpMethod, url: &str, body: &str) -> String {
    let body = Some(body.trim())
        .filter(|b| !b.is_empty() && method.has_body());
    match language {
        CodeLanguage::Curl => curl(method, url, body),
        CodeLanguage::JavaScript => javascript(method, url, body),
        CodeLanguage::Python => python(method, url, body),
        CodeLanguage::Go => go(method, url, body),
    }
}

fn curl(method: HttpMethod, url: &str, body: Option<&str>) -> String {
    let mut out = format!("curl -X {method} '{url}'");
    if let Some(body) = body {
        out.push_str(" \\\n  -H 'Content-Type: application/json' \\\n  -d '");
        out.push_str(&body.replace('\'', "'\\''"));
        out.push('\'');
    }
    out
}

fn javascript(method: HttpMethod, url: &str, body: Option<&str>) -> String {
    let mut out = format!("fetch('{url}', {{\n  method: '{method}',");
    if let Some(body) = body {
        let escaped = body.replace('\\', "\\\\").replace('\'', "\\'");
        out.push_str(&format!(
            "\n  headers: {{\n    'Content-Type': 'application/json'\n  }},\n  body: '{escaped}'"
        ));
    }
    out.push_str(
        "\n})\n  .then(response => response.text())\n  .then(data => console.log(data))\n  .catch(error => console.error('Error:', error));",
    );
    out
}

fn python(method: HttpMethod, url: &str, body: Option<&str>) -> String {
    let func = method.as_str().to_lowercase();
    let json = body
        .map(|b| format!(",\n    json={b}"))
        .unwrap_or_default();
    format!("import requests\n\nresponse = requests.{func}('{url}'{json})\nprint(response.text)")
}

fn go(method: HttpMethod, url: &str, body: Option<&str>) -> String {
    let strings_import = if body.is_some() { "\n    \"strings\"" } else { "" };
    let request = match body {
        Some(b) => format!(
            "body := strings.NewReader(`{b}`)\n    req, err := http.NewRequest(\"{method}\", \"{url}\", body)"
        ),
        None => format!("req, err := http.NewRequest(\"{method}\", \"{url}\", nil)"),
    };
    let content_type = if body.is_some() {
        "req.Header.Set(\"Content-Type\", \"application/json\")\n    "
    } else {
        ""
    };
    format!(
        r#"package main

import (
    "fmt"
    "io"
    "net/http"{strings_import}
)

func main() {{
    {request}
    if err != nil {{
        panic(err)
    }}
    {content_type}
    client := &http.Client{{}}
    resp, err := client.Do(req)
    if err != nil {{
        panic(err)
    }}
    defer resp.Body.Close()

    bodyBytes, _ := io.ReadAll(resp.Body)
    fmt.Println(string(bodyBytes))
}}"#
    )
}
