use super::*;
use crate::template::NoContent;

fn vendor() -> Citation {
	Citation {
		title: None,
		identifiers: vec![
			Identifier::new("Proj"),
			Identifier::new("proj").with_version("9.4"),
		],
		parties: vec![
			Party {
				name: Some("OSGeo".into()),
				linkage: None,
			},
			Party {
				name: None,
				linkage: Some("https://proj.org".into()),
			},
		],
	}
}

#[test]
fn test_common_defaults() {
	let base = ReportBase::new("AuthorityCodesReport", &Properties::new());
	let p = base.properties();
	assert_eq!(p.get("TITLE"), Some("AuthorityCodesReport"));
	assert_eq!(p.get("FILENAME"), Some("AuthorityCodesReport.html"));
	assert_eq!(p.get("DESCRIPTION"), Some(""));
	assert_eq!(p.get("JAVADOC.GEOAPI"), Some(JAVADOC_GEOAPI));
	assert_eq!(p.get("DATE"), Some(today()));
	assert_eq!(p.get("PRODUCT.VERSION"), Some(today()));
	assert_eq!(today().len(), 10);
}

#[test]
fn test_explicit_properties_win() {
	let mut user = Properties::new();
	user.set("TITLE", "Mine");
	let mut base = ReportBase::new("X", &user);
	base.set_default("TITLE", "Computed");
	assert_eq!(base.properties().get("TITLE"), Some("Mine"));
}

/// Name from the first identifier, version from the first one carrying it,
/// URL from the first party linkage.
#[test]
fn test_vendor_fills_defaults() {
	let mut base = ReportBase::new("X", &Properties::new());
	base.set_vendor("PRODUCT", &vendor());
	let p = base.properties();
	assert_eq!(p.get("PRODUCT.NAME"), Some("Proj"));
	assert_eq!(p.get("PRODUCT.VERSION"), Some("9.4"));
	assert_eq!(p.get("PRODUCT.URL"), Some("https://proj.org"));
}

#[test]
fn test_vendor_name_from_party() {
	let mut base = ReportBase::new("X", &Properties::new());
	let citation = Citation {
		parties: vec![Party {
			name: Some("EPSG".into()),
			linkage: None,
		}],
		..Citation::default()
	};
	base.set_vendor("FACTORY", &citation);
	let p = base.properties();
	assert_eq!(p.get("FACTORY.NAME"), Some("EPSG"));
	assert_eq!(p.get("FACTORY.VERSION"), Some(today()));
	assert_eq!(p.get("FACTORY.URL"), None);
}

#[test]
fn test_to_file_uses_filename_in_directories() {
	let dir = tempfile::tempdir().unwrap();
	let mut base = ReportBase::new("X", &Properties::new());
	assert_eq!(base.to_file(dir.path()), dir.path().join("X.html"));
	base.set_default("FILENAME", "CRSCodes.html");
	assert_eq!(base.to_file(dir.path()), dir.path().join("CRSCodes.html"));
	let file = dir.path().join("out.html");
	assert_eq!(base.to_file(&file), file);
}

#[test]
fn test_filter_keeps_existing_stylesheet() {
	let dir = tempfile::tempdir().unwrap();
	let css = dir.path().join(resources::STYLESHEET);
	std::fs::write(&css, "body {}").unwrap();

	let mut user = Properties::new();
	user.set("PRODUCT.NAME", "Proj");
	user.set("PRODUCT.URL", "https://proj.org");
	user.set("NUM.ROWS", "0");
	user.set("PERCENT.VALIDS", "0");
	user.set("PERCENT.ANNOTATED", "0");
	user.set("CONTENT", "");
	let base = ReportBase::new("X", &user);
	let out = dir.path().join("out.html");
	base.filter(resources::AUTHORITY_CODES, &out, &mut NoContent).unwrap();

	assert_eq!(std::fs::read_to_string(&css).unwrap(), "body {}");
	let html = std::fs::read_to_string(&out).unwrap();
	assert!(html.contains("<title>X</title>"));
	assert!(html.contains("<a href=\"https://proj.org\">Proj</a>"));
}

#[test]
fn test_filter_reports_missing_property() {
	let dir = tempfile::tempdir().unwrap();
	let base = ReportBase::new("X", &Properties::new());
	let err = base
		.filter(resources::AUTHORITY_CODES, &dir.path().join("out.html"), &mut NoContent)
		.unwrap_err();
	assert!(matches!(err, ReportError::MissingProperty(ref k) if k == "PRODUCT.URL"));
	assert!(dir.path().join(resources::STYLESHEET).is_file());
}
