use crate::code_list;

code_list! {
	/// Name of the character coding standard used for a resource.
	pub struct CharacterSet: "MD_CharacterSetCode" {
		UCS_2 = "ucs2",
		UCS_4 = "ucs4",
		UTF_7 = "utf7",
		UTF_8 = "utf8",
		UTF_16 = "utf16",
		ISO_8859_1 = "8859part1",
		ISO_8859_2 = "8859part2",
		ISO_8859_3 = "8859part3",
		ISO_8859_4 = "8859part4",
		ISO_8859_5 = "8859part5",
		ISO_8859_6 = "8859part6",
		ISO_8859_7 = "8859part7",
		ISO_8859_8 = "8859part8",
		ISO_8859_9 = "8859part9",
		ISO_8859_10 = "8859part10",
		ISO_8859_11 = "8859part11",
		ISO_8859_12 = "8859part12",
		ISO_8859_13 = "8859part13",
		ISO_8859_14 = "8859part14",
		ISO_8859_15 = "8859part15",
		ISO_8859_16 = "8859part16",
		JIS = "jis",
		SHIFT_JIS = "shiftJIS",
		EUC_JP = "eucJP",
		US_ASCII = "usAscii",
		EBCDIC = "ebcdic",
		EUC_KR = "eucKR",
		BIG_5 = "big5",
		GB2312 = "GB2312",
	}
}

/// IANA charset names, by code name.
const IANA_NAMES: &[(&str, &str)] = &[
	("UCS_2", "UCS-2"),
	("UCS_4", "UCS-4"),
	("UTF_7", "UTF-7"),
	("UTF_8", "UTF-8"),
	("UTF_16", "UTF-16"),
	("ISO_8859_1", "ISO-8859-1"),
	("ISO_8859_2", "ISO-8859-2"),
	("ISO_8859_3", "ISO-8859-3"),
	("ISO_8859_4", "ISO-8859-4"),
	("ISO_8859_5", "ISO-8859-5"),
	("ISO_8859_6", "ISO-8859-6"),
	("ISO_8859_7", "ISO-8859-7"),
	("ISO_8859_8", "ISO-8859-8"),
	("ISO_8859_9", "ISO-8859-9"),
	("ISO_8859_10", "ISO-8859-10"),
	("ISO_8859_11", "ISO-8859-11"),
	("ISO_8859_12", "ISO-8859-12"),
	("ISO_8859_13", "ISO-8859-13"),
	("ISO_8859_14", "ISO-8859-14"),
	("ISO_8859_15", "ISO-8859-15"),
	("ISO_8859_16", "ISO-8859-16"),
	("JIS", "JIS_X0201"),
	("SHIFT_JIS", "Shift_JIS"),
	("EUC_JP", "EUC-JP"),
	("US_ASCII", "US-ASCII"),
	("EUC_KR", "EUC-KR"),
	("BIG_5", "Big5"),
	("GB2312", "GB2312"),
];

impl CharacterSet {
	/// IANA name of the charset, when one exists.
	pub fn charset_name(&self) -> Option<&'static str> {
		let name = crate::CodeList::name(self);
		IANA_NAMES
			.iter()
			.find(|(code, _)| *code == name)
			.map(|&(_, iana)| iana)
	}
}
