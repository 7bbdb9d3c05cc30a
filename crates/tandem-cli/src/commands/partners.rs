use std::io::Write;

use anyhow::Result;
use tandem_core::partner::PartnerFilter;

use crate::app::App;

pub fn list(app: &App, filter: &PartnerFilter, out: &mut impl Write) -> Result<()> {
    let partners = app.partners().search(filter);

    if partners.is_empty() {
        writeln!(out, "No language partners match your filters.")?;
        return Ok(());
    }

    for partner in partners {
        writeln!(
            out,
            "[{}] {:<16} {} -> {}  rating {:.1}  {}",
            partner.id,
            partner.name,
            partner.native_language,
            partner.learning_language,
            partner.rating,
            partner.availability
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::tests::test_app;

    #[test]
    fn test_filtered_listing() {
        let app = test_app();
        let filter = PartnerFilter {
            learning_language: Some("German".to_string()),
            ..Default::default()
        };
        let mut out = Vec::new();

        list(&app, &filter, &mut out).unwrap();

        let printed = String::from_utf8(out).unwrap();
        assert_eq!(printed.lines().count(), 2);
        assert!(printed.contains("[3] Sophie Dubois"));
        assert!(printed.contains("[7] Paolo Rossi"));
    }

    #[test]
    fn test_no_matches() {
        let app = test_app();
        let filter = PartnerFilter {
            query: "nobody".to_string(),
            ..Default::default()
        };
        let mut out = Vec::new();

        list(&app, &filter, &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "No language partners match your filters.\n"
        );
    }
}
