use pretty_assertions::assert_eq;

use super::*;
use crate::identifier::Identifier;

fn render(row: &Row, highlight: bool) -> String {
	let mut out = Vec::new();
	row.write(&mut out, highlight).unwrap();
	String::from_utf8(out).unwrap()
}

fn codes() -> AuthorityCodes {
	serde_json::from_str(
		r#"{
			"vendor": {"title": "Proj", "identifiers": [{"code": "proj", "version": "9.4"}],
				"parties": [{"linkage": "https://proj.org"}]},
			"authority": {"title": "EPSG"},
			"entries": [
				{"code": "4326", "object": {"name": {"code": "WGS 84"}}},
				{"code": "27561", "object": {"name": {"code": "NTF (Paris) / Lambert Nord France"}}, "annotation": "*"},
				{"code": "9999", "error": "No code \"9999\" from authority \"EPSG\"."},
				{"code": "3857", "object": {"name": {"code": "WGS 84 / Pseudo-Mercator"}, "remarks": "Not a <datum>"}}
			]
		}"#,
	)
	.unwrap()
}

#[test]
fn test_row_html() {
	let row = Row::created("4326", &IdentifiedObject::named(Identifier::new("WGS 84")));
	assert_eq!(render(&row, false), "<tr><td></td><td><code>4326</code></td><td>WGS 84</td><td></td></tr>");

	let mut row = Row::failed("9999", "unknown <code>");
	row.annotation = Some('*');
	assert_eq!(
		render(&row, true),
		"<tr class=\"HL\"><td>*</td><td><code>9999</code></td><td></td><td class=\"error\">unknown &lt;code&gt;</td></tr>"
	);
}

#[test]
fn test_add_all_builds_rows_and_vendor() {
	let mut report = AuthorityCodesReport::new(&Properties::new());
	report.add_all(&codes());
	let rows = report.rows();
	assert_eq!(rows.len(), 4);
	assert_eq!(rows[1].annotation, Some('*'));
	assert!(rows[2].has_error);
	assert_eq!(rows[3].remark.as_deref(), Some("Not a <datum>"));

	let p = report.base().properties();
	assert_eq!(p.get("PRODUCT.NAME"), Some("Proj"));
	assert_eq!(p.get("PRODUCT.VERSION"), Some("9.4"));
	assert_eq!(p.get("FACTORY.NAME"), Some("EPSG"));
}

#[test]
fn test_generic_kind_keeps_report_defaults() {
	let mut report = AuthorityCodesReport::new(&Properties::new());
	report.add_all(&codes());
	assert_eq!(codes().kind, ObjectKind::Generic);
	assert_eq!(report.base().properties().get("FILENAME"), Some("AuthorityCodesReport.html"));
}

/// CRS input switches the default title and file name; explicit values win.
#[test]
fn test_crs_kind_sets_defaults() {
	let mut input = codes();
	input.kind = serde_json::from_str(r#""crs""#).unwrap();
	assert_eq!(input.kind, ObjectKind::CoordinateReferenceSystem);

	let mut report = AuthorityCodesReport::new(&Properties::new());
	report.add_all(&input);
	let p = report.base().properties();
	assert_eq!(p.get("TITLE"), Some("Authority codes for Coordinate Reference Systems"));
	assert_eq!(p.get("FILENAME"), Some("CRSCodes.html"));

	let mut explicit = Properties::new();
	explicit.set("TITLE", "EPSG codes");
	let mut report = AuthorityCodesReport::new(&explicit);
	report.add_all(&input);
	assert_eq!(report.base().properties().get("TITLE"), Some("EPSG codes"));
}

/// 3 of 4 valid truncates to 75; 1 of 4 annotated rounds to 25; 2 of 3
/// valid truncates to 66; 1 of 8 annotated rounds 12.5 up to 13.
#[test]
fn test_statistics() {
	let mut report = AuthorityCodesReport::new(&Properties::new());
	report.add_all(&codes());
	report.compute_statistics();
	let p = report.base().properties();
	assert_eq!(p.get("NUM.ROWS"), Some("4"));
	assert_eq!(p.get("PERCENT.VALIDS"), Some("75"));
	assert_eq!(p.get("PERCENT.ANNOTATED"), Some("25"));

	let mut report = AuthorityCodesReport::new(&Properties::new());
	report.add(Row::new("1"));
	report.add(Row::new("2"));
	report.add(Row::failed("3", "x"));
	report.compute_statistics();
	assert_eq!(report.base().properties().get("PERCENT.VALIDS"), Some("66"));

	let mut report = AuthorityCodesReport::new(&Properties::new());
	for i in 0..8 {
		let mut row = Row::new(i.to_string());
		row.annotation = (i == 0).then_some('*');
		report.add(row);
	}
	report.compute_statistics();
	assert_eq!(report.base().properties().get("PERCENT.ANNOTATED"), Some("13"));
}

#[test]
fn test_empty_report_has_zero_statistics() {
	let mut report = AuthorityCodesReport::new(&Properties::new());
	report.compute_statistics();
	let p = report.base().properties();
	assert_eq!(p.get("NUM.ROWS"), Some("0"));
	assert_eq!(p.get("PERCENT.VALIDS"), Some("0"));
}

#[test]
fn test_rows_alternate_highlight_in_pairs() {
	let rows: Vec<Row> = (0..5).map(|i| Row::new(i.to_string())).collect();
	let mut out = Vec::new();
	RowTable { rows: &rows }.write_content("CONTENT", &mut out).unwrap();
	let text = String::from_utf8(out).unwrap();
	let highlighted: Vec<bool> = text.lines().map(|l| l.contains("class=\"HL\"")).collect();
	assert_eq!(highlighted, vec![false, false, true, true, false]);
	assert!(text.lines().all(|l| l.starts_with("      <tr")));
}
