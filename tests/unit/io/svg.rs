//! Tests for SVG composition

#[cfg(test)]
mod tests {
    use flowlines::algorithm::executor::{Artwork, RunStats};
    use flowlines::io::svg::{Overlay, escape_xml, render_svg, write_svg};
    use flowlines::spatial::{Canvas, Point};
    use flowlines::style::{Color, StyledLine};

    fn artwork() -> Artwork {
        let points = [Point::new(30.0, 40.0), Point::new(33.0, 41.0)];
        let lines = StyledLine::from_points(&points, Color::from_hex(0x31_9BBC), 2.5)
            .into_iter()
            .collect();

        Artwork {
            seed: 7,
            canvas: Canvas::new(1200.0, 675.0, 20.0),
            lines,
            background: Color::from_hex(0xED_EAE6),
            foreground: Color::from_hex(0x27_272E),
            scheme: "light".to_string(),
            footprints: vec![vec![Point::new(30.0, 40.0), Point::new(31.25, 41.5)]],
            stats: RunStats::default(),
        }
    }

    // Tests the document has the canvas size, background and one path per line
    #[test]
    fn test_render_structure() {
        let svg = render_svg(&artwork(), &Overlay::default());

        assert!(svg.starts_with(r#"<svg width="1200" height="675""#));
        assert!(svg.contains(r##"<rect width="1200" height="675" fill="#EDEAE6" />"##));
        assert!(svg.contains(
            r##"<path d="M30 40 L33 41" stroke="#319BBC" stroke-width="2.5" fill="none" />"##
        ));
        assert_eq!(svg.matches("<path ").count(), 1);
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    // Tests the overlay text, badge and escaping
    #[test]
    fn test_overlay_text() {
        let overlay = Overlay {
            title: "Lines & <Fields>".to_string(),
            subtitle: "Sub".to_string(),
            author: "Ada".to_string(),
            show_footprints: false,
        };
        let svg = render_svg(&artwork(), &overlay);

        assert!(svg.contains("Lines &amp; &lt;Fields&gt;"));
        assert!(svg.contains(">Ada</text>"));
        assert!(svg.contains(">Sub</text>"));
        assert!(svg.contains(r##"fill="#ECD181""##));
        assert!(!svg.contains("<circle cx=\"30.00\""));
    }

    // Tests footprint dots only appear when requested
    #[test]
    fn test_footprint_overlay() {
        let overlay = Overlay {
            show_footprints: true,
            ..Overlay::default()
        };
        let svg = render_svg(&artwork(), &overlay);

        assert!(svg.contains(r#"<circle cx="30.00" cy="40.00" r="0.5" />"#));
        assert!(svg.contains(r#"<circle cx="31.25" cy="41.50" r="0.5" />"#));
    }

    // Tests every element sits on its own line with groups closed in order
    #[test]
    fn test_document_layout() {
        let overlay = Overlay {
            show_footprints: true,
            ..Overlay::default()
        };
        let svg = render_svg(&artwork(), &overlay);
        let lines: Vec<&str> = svg.lines().map(str::trim).collect();

        assert!(svg.ends_with("</svg>\n"));
        assert_eq!(lines.first().map(|line| line.starts_with("<svg ")), Some(true));
        assert_eq!(lines.last(), Some(&"</svg>"));
        assert_eq!(svg.matches("<g ").count(), 2);
        assert_eq!(lines.iter().filter(|&&line| line == "</g>").count(), 2);
        assert!(lines.iter().all(|line| line.starts_with('<') && line.ends_with('>')));

        let path = svg.find("<path ");
        let footprints = svg.find(r#"fill-opacity="0.6""#);
        let text = svg.find("font-family=");
        assert!(path < footprints && footprints < text);
    }

    // Tests escaping of all special characters
    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml(r#"a<b>&"c'"#), "a&lt;b&gt;&amp;&quot;c&apos;");
        assert_eq!(escape_xml("plain"), "plain");
    }

    // Tests writing creates parent directories
    #[test]
    fn test_write_svg() {
        let Ok(dir) = tempfile::tempdir() else {
            return;
        };
        let path = dir.path().join("out").join("art.svg");

        assert!(write_svg(&artwork(), &Overlay::default(), &path).is_ok());
        let written = std::fs::read_to_string(&path).unwrap_or_default();
        assert!(written.contains("This is the default title"));
    }
}
