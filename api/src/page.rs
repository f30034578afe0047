use phishguard_types::{InterfaceConfig, Label};

/// What the output field shows after a submission.
pub enum Output {
    Empty,
    Label(Label),
    Error(String),
}

pub fn render(config: &InterfaceConfig, input: &str, output: &Output) -> String {
    let title = escape(&config.title);
    let description = escape(&config.description);
    let input = escape(input);
    let (output_class, output_text) = match output {
        Output::Empty => ("output", String::new()),
        Output::Label(label) => ("output", label.to_string()),
        Output::Error(message) => ("output error", format!("Error: {}", escape(message))),
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<style>
body {{ font-family: sans-serif; max-width: 48rem; margin: 2rem auto; padding: 0 1rem; }}
textarea {{ width: 100%; min-height: 10rem; }}
.output {{ border: 1px solid #ccc; border-radius: 4px; padding: 0.75rem; min-height: 1.5rem; }}
.error {{ background: #fee2e2; border-color: #f87171; color: #b91c1c; }}
</style>
</head>
<body>
<h1>{title}</h1>
<p>{description}</p>
<form method="post" action="/">
<label for="email_text">email_text</label>
<textarea id="email_text" name="email_text">{input}</textarea>
<p><button type="reset">Clear</button> <button type="submit">Submit</button></p>
</form>
<label>output</label>
<div class="{output_class}" id="output">{output_text}</div>
</body>
</html>
"#
    )
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }
    escaped
}
