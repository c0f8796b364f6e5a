use std::fmt::Write as _;

use crate::{
    compile::draw::{DrawList, DrawOp, FontWeight, Role, Stroke, TextAnchor, TextStyle},
    foundation::error::{StoryError, StoryResult},
};

const FONT_FAMILY: &str = "sans-serif";

/// Serialize a draw list as a standalone SVG document.
///
/// Scene title and description become `<title>` and `<desc>`. Every element carries a class
/// derived from its [`Role`]; the hover label and info line get the ids `tooltip` and `info`.
pub fn to_svg(list: &DrawList) -> StoryResult<String> {
    let mut out = String::with_capacity(256 + list.ops.len() * 96);
    write_document(&mut out, list).map_err(|e| StoryError::render(format!("write svg: {e}")))?;
    Ok(out)
}

fn write_document(out: &mut String, list: &DrawList) -> std::fmt::Result {
    let (w, h) = (list.canvas.width, list.canvas.height);
    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" font-family="{FONT_FAMILY}" data-scene="{}">"#,
        list.scene.index()
    )?;
    writeln!(out, "  <title>{}</title>", escape(&list.title))?;
    writeln!(out, "  <desc>{}</desc>", escape(&list.description))?;
    for op in &list.ops {
        out.push_str("  ");
        write_op(out, op)?;
        out.push('\n');
    }
    out.push_str("</svg>\n");
    Ok(())
}

fn write_op(out: &mut String, op: &DrawOp) -> std::fmt::Result {
    match op {
        DrawOp::Path {
            role,
            path,
            fill,
            stroke,
        } => {
            write!(out, "<path{} d=\"{}\"", role_attrs(*role), path.to_svg())?;
            match fill {
                Some(c) => write!(out, r#" fill="{}""#, c.to_hex())?,
                None => out.push_str(r#" fill="none""#),
            }
            if let Some(Stroke { color, width }) = stroke {
                write!(
                    out,
                    r#" stroke="{}" stroke-width="{}""#,
                    color.to_hex(),
                    width
                )?;
            }
            out.push_str("/>");
        }
        DrawOp::Circle {
            role,
            center,
            radius,
            fill,
        } => {
            write!(
                out,
                r#"<circle{} cx="{}" cy="{}" r="{}" fill="{}"/>"#,
                role_attrs(*role),
                center.x,
                center.y,
                radius,
                fill.to_hex()
            )?;
        }
        DrawOp::Text {
            role,
            origin,
            content,
            style,
        } => {
            write!(
                out,
                r#"<text{} x="{}" y="{}"{}>{}</text>"#,
                role_attrs(*role),
                origin.x,
                origin.y,
                text_attrs(style),
                escape(content)
            )?;
        }
    }
    Ok(())
}

fn role_attrs(role: Role) -> String {
    match role {
        Role::Axis => r#" class="axis""#.to_string(),
        Role::Series => r#" class="line""#.to_string(),
        Role::Dot => r#" class="dot""#.to_string(),
        Role::FocusDot => r#" class="focus-dot""#.to_string(),
        Role::Annotation(id) => format!(r#" class="annotation" data-annotation="{id}""#),
        Role::Land => r#" class="land""#.to_string(),
        Role::Marker(i) => format!(r#" class="marker" data-index="{i}""#),
        Role::Tooltip => r#" id="tooltip" class="tooltip""#.to_string(),
        Role::Info => r#" id="info" class="info""#.to_string(),
    }
}

fn text_attrs(style: &TextStyle) -> String {
    let mut attrs = format!(
        r#" font-size="{}" fill="{}""#,
        style.size_px,
        style.fill.to_hex()
    );
    if style.weight == FontWeight::Bold {
        attrs.push_str(r#" font-weight="bold""#);
    }
    match style.anchor {
        TextAnchor::Start => {}
        TextAnchor::Middle => attrs.push_str(r#" text-anchor="middle""#),
        TextAnchor::End => attrs.push_str(r#" text-anchor="end""#),
    }
    if style.dy_em != 0.0 {
        let _ = write!(attrs, r#" dy="{}em""#, style.dy_em);
    }
    attrs
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/svg.rs"]
mod tests;
