//! Format converter: finished markdown documents into standalone,
//! print-ready HTML pages (A4 page setup, header/footer counters).
//!
//! Covers exactly the block and inline forms the shipped templates produce:
//! ATX headings, bullet lists, pipe tables, horizontal rules, paragraphs,
//! bold and italic spans. PDF rendering itself stays outside this system.

const DOCUMENT_CSS: &str = r#"
@page {
    size: A4;
    margin: 2cm;
    @top-center { content: "HR Document"; font-size: 10pt; color: #666; }
    @bottom-center { content: "Page " counter(page) " of " counter(pages); font-size: 10pt; color: #666; }
}
body { font-family: Arial, sans-serif; font-size: 12pt; line-height: 1.6; color: #333; }
h1 { font-size: 24pt; color: #2c3e50; border-bottom: 2px solid #3498db; padding-bottom: 10px; margin-bottom: 20px; }
h2 { font-size: 18pt; color: #34495e; margin-top: 25px; margin-bottom: 15px; }
h3 { font-size: 14pt; color: #2c3e50; margin-top: 20px; margin-bottom: 10px; }
p { margin-bottom: 12px; text-align: justify; }
table { width: 100%; border-collapse: collapse; margin: 20px 0; }
th, td { border: 1px solid #ddd; padding: 12px; text-align: left; }
th { background-color: #f8f9fa; font-weight: bold; color: #2c3e50; }
ul { margin-bottom: 15px; padding-left: 20px; }
li { margin-bottom: 5px; }
hr { border: none; border-top: 1px solid #ddd; margin: 30px 0; }
"#;

/// Wraps converted content in a complete HTML document with the print
/// stylesheet embedded.
pub fn markdown_to_document(markdown: &str, title: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"UTF-8\">\n<title>{}</title>\n\
         <style>{DOCUMENT_CSS}</style>\n</head>\n<body>\n{}\n</body>\n</html>\n",
        inline(title),
        markdown_to_html(markdown)
    )
}

/// Block-level conversion for the bounded subset described in the module docs.
pub fn markdown_to_html(markdown: &str) -> String {
    let mut out: Vec<String> = Vec::new();
    let mut paragraph: Vec<String> = Vec::new();
    let mut table: Vec<String> = Vec::new();
    let mut list_open = false;

    for line in markdown.lines() {
        let trimmed = line.trim();

        if trimmed.is_empty() {
            flush_paragraph(&mut out, &mut paragraph);
            flush_table(&mut out, &mut table);
            close_list(&mut out, &mut list_open);
        } else if let Some(rest) = trimmed.strip_prefix("### ") {
            flush_all(&mut out, &mut paragraph, &mut table, &mut list_open);
            out.push(format!("<h3>{}</h3>", inline(rest)));
        } else if let Some(rest) = trimmed.strip_prefix("## ") {
            flush_all(&mut out, &mut paragraph, &mut table, &mut list_open);
            out.push(format!("<h2>{}</h2>", inline(rest)));
        } else if let Some(rest) = trimmed.strip_prefix("# ") {
            flush_all(&mut out, &mut paragraph, &mut table, &mut list_open);
            out.push(format!("<h1>{}</h1>", inline(rest)));
        } else if trimmed == "---" {
            flush_all(&mut out, &mut paragraph, &mut table, &mut list_open);
            out.push("<hr>".to_string());
        } else if let Some(item) = trimmed.strip_prefix("- ") {
            flush_paragraph(&mut out, &mut paragraph);
            flush_table(&mut out, &mut table);
            if !list_open {
                out.push("<ul>".to_string());
                list_open = true;
            }
            out.push(format!("<li>{}</li>", inline(item)));
        } else if trimmed.starts_with('|') {
            flush_paragraph(&mut out, &mut paragraph);
            close_list(&mut out, &mut list_open);
            table.push(trimmed.to_string());
        } else {
            flush_table(&mut out, &mut table);
            close_list(&mut out, &mut list_open);
            paragraph.push(trimmed.to_string());
        }
    }
    flush_all(&mut out, &mut paragraph, &mut table, &mut list_open);

    out.join("\n")
}

fn flush_all(
    out: &mut Vec<String>,
    paragraph: &mut Vec<String>,
    table: &mut Vec<String>,
    list_open: &mut bool,
) {
    flush_paragraph(out, paragraph);
    flush_table(out, table);
    close_list(out, list_open);
}

fn flush_paragraph(out: &mut Vec<String>, paragraph: &mut Vec<String>) {
    if !paragraph.is_empty() {
        out.push(format!("<p>{}</p>", inline(&paragraph.join(" "))));
        paragraph.clear();
    }
}

fn close_list(out: &mut Vec<String>, list_open: &mut bool) {
    if *list_open {
        out.push("</ul>".to_string());
        *list_open = false;
    }
}

fn is_separator_row(row: &str) -> bool {
    row.trim_matches('|').split('|').all(|cell| {
        let cell = cell.trim();
        !cell.is_empty() && cell.chars().all(|c| c == '-' || c == ':')
    })
}

fn flush_table(out: &mut Vec<String>, rows: &mut Vec<String>) {
    if rows.is_empty() {
        return;
    }
    let has_header = rows.len() >= 2 && is_separator_row(&rows[1]);
    out.push("<table>".to_string());
    for (i, row) in rows.iter().enumerate() {
        if has_header && i == 1 {
            continue;
        }
        let tag = if has_header && i == 0 { "th" } else { "td" };
        let cells: String = row
            .trim_matches('|')
            .split('|')
            .map(|cell| format!("<{tag}>{}</{tag}>", inline(cell.trim())))
            .collect();
        out.push(format!("<tr>{cells}</tr>"));
    }
    out.push("</table>".to_string());
    rows.clear();
}

/// Escapes HTML, then resolves `**bold**` and `*italic*` pairs. Unpaired
/// markers stay verbatim.
fn inline(text: &str) -> String {
    let escaped = text
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;");

    let mut result = String::with_capacity(escaped.len());
    let mut rest = escaped.as_str();
    while let Some(idx) = rest.find('*') {
        result.push_str(&rest[..idx]);
        let after = &rest[idx..];
        if let Some(stripped) = after.strip_prefix("**") {
            match stripped.find("**") {
                Some(end) if end > 0 => {
                    result.push_str("<strong>");
                    result.push_str(&stripped[..end]);
                    result.push_str("</strong>");
                    rest = &stripped[end + 2..];
                }
                _ => {
                    result.push_str("**");
                    rest = stripped;
                }
            }
        } else {
            let stripped = &after[1..];
            match stripped.find('*') {
                Some(end) if end > 0 => {
                    result.push_str("<em>");
                    result.push_str(&stripped[..end]);
                    result.push_str("</em>");
                    rest = &stripped[end + 1..];
                }
                _ => {
                    result.push('*');
                    rest = stripped;
                }
            }
        }
    }
    result.push_str(rest);
    result
}
