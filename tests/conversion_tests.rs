use indoc::indoc;
use std::fs;
use std::path::Path;
use stringsheet::{Codec, ConvertOptions, Error, ResLayout, convert_csv_to_xml, convert_xml_to_csv};
use tempfile::TempDir;

fn write_strings(res: &Path, folder: &str, content: &str) {
    let dir = res.join(folder);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("strings.xml"), content).unwrap();
}

fn sample_res_dir(root: &Path) -> std::path::PathBuf {
    let res = root.join("res");
    write_strings(
        &res,
        "values-en",
        indoc! {r#"
            <?xml version="1.0" encoding="utf-8"?>
            <resources>
                <string name="hello">Hello</string>
            </resources>
        "#},
    );
    write_strings(
        &res,
        "values-fr",
        indoc! {r#"
            <?xml version="1.0" encoding="utf-8"?>
            <resources>
                <string name="hello">Bonjour</string>
                <string name="bye">Au revoir</string>
            </resources>
        "#},
    );
    res
}

#[test]
fn test_xml_to_csv_layout() {
    let temp_dir = TempDir::new().unwrap();
    let res = sample_res_dir(temp_dir.path());
    let csv = temp_dir.path().join("strings.csv");

    let summary = convert_xml_to_csv(&res, &csv).unwrap();
    assert_eq!(summary.languages, 2);
    assert_eq!(summary.keys, 2);
    assert_eq!(summary.files, vec![csv.clone()]);

    let content = fs::read_to_string(&csv).unwrap();
    assert_eq!(
        content,
        "code \\ language,en,fr\nbye,,Au revoir\nhello,Hello,Bonjour\n"
    );
}

#[test]
fn test_full_round_trip_fills_missing_translations() {
    let temp_dir = TempDir::new().unwrap();
    let res = sample_res_dir(temp_dir.path());
    let csv = temp_dir.path().join("strings.csv");
    let out = temp_dir.path().join("out");

    convert_xml_to_csv(&res, &csv).unwrap();
    let summary = convert_csv_to_xml(&csv, &out).unwrap();
    assert_eq!(summary.files.len(), 2);

    let codec = Codec::new();
    let original = codec.read_res_dir(&res).unwrap();
    let rebuilt = codec.read_res_dir(&out).unwrap();

    assert_eq!(rebuilt.translation("fr", "bye"), Some("Au revoir"));
    assert_eq!(rebuilt.translation("en", "hello"), Some("Hello"));
    // Absent in the source, present-but-empty after the round trip.
    assert_eq!(original.translation("en", "bye"), None);
    assert_eq!(rebuilt.translation("en", "bye"), Some(""));
}

#[test]
fn test_edited_csv_is_imported() {
    let temp_dir = TempDir::new().unwrap();
    let csv = temp_dir.path().join("edited.csv");
    fs::write(
        &csv,
        "code \\ language,en,de\nhello,Hello,Hallo\nquote,\"Say \"\"hi\"\" & wave\",\n",
    )
    .unwrap();
    let out = temp_dir.path().join("res");

    convert_csv_to_xml(&csv, &out).unwrap();

    let en = fs::read_to_string(out.join("values-en/strings.xml")).unwrap();
    assert!(en.contains(r#"<string name="hello">Hello</string>"#));
    assert!(en.contains("&amp;"));
    let de = fs::read_to_string(out.join("values-de/strings.xml")).unwrap();
    assert!(de.contains(r#"<string name="quote"></string>"#));

    // Plain text is escaped on the way in and read back as written.
    let set = Codec::new().read_res_dir(&out).unwrap();
    assert_eq!(set.translation("en", "quote"), Some("Say \"hi\" &amp; wave"));
}

#[test]
fn test_markup_survives_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let res = temp_dir.path().join("res");
    let welcome =
        r#"<string name="welcome">Hello <b>World</b>, see <a href="x">link</a></string>"#;
    write_strings(&res, "values-en", &format!("<resources>{}</resources>", welcome));
    let csv = temp_dir.path().join("strings.csv");
    let out = temp_dir.path().join("out");

    convert_xml_to_csv(&res, &csv).unwrap();
    let content = fs::read_to_string(&csv).unwrap();
    assert!(
        content.contains(r#"Hello <b>World</b>, see <a href=""x"">link</a>"#),
        "content: {}",
        content
    );

    convert_csv_to_xml(&csv, &out).unwrap();
    let xml = fs::read_to_string(out.join("values-en/strings.xml")).unwrap();
    assert!(xml.contains(welcome), "xml: {}", xml);
}

#[test]
fn test_language_code_cannot_leave_output_dir() {
    let temp_dir = TempDir::new().unwrap();
    let csv = temp_dir.path().join("strings.csv");
    fs::write(&csv, "code \\ language,/../../escaped\nhello,Hello\n").unwrap();
    let out = temp_dir.path().join("a/res");

    let err = convert_csv_to_xml(&csv, &out).unwrap_err();
    assert!(matches!(err, Error::InvalidLanguage(_)), "got {err:?}");
    assert!(!temp_dir.path().join("a").exists());
    assert!(!temp_dir.path().join("a/escaped").exists());
}

#[test]
fn test_keys_without_language_columns_are_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let csv = temp_dir.path().join("strings.csv");
    fs::write(&csv, "code \\ language\nhello\nbye\n").unwrap();

    let err = convert_csv_to_xml(&csv, temp_dir.path().join("res")).unwrap_err();
    assert!(matches!(err, Error::MalformedMatrix(_)), "got {err:?}");
    assert!(!temp_dir.path().join("res").exists());
}

#[test]
fn test_csv_to_xml_into_existing_dir_needs_overwrite() {
    let temp_dir = TempDir::new().unwrap();
    let res = sample_res_dir(temp_dir.path());
    let csv = temp_dir.path().join("strings.csv");
    fs::write(&csv, "code \\ language,fr\nhello,Salut\n").unwrap();

    let err = convert_csv_to_xml(&csv, &res).unwrap_err();
    assert!(matches!(err, Error::AlreadyExists(_)));

    Codec::with_options(ConvertOptions::new().with_overwrite(true))
        .csv_to_xml(&csv, &res)
        .unwrap();
    let set = Codec::new().read_res_dir(&res).unwrap();
    assert_eq!(set.translation("fr", "hello"), Some("Salut"));
    // Languages missing from the CSV are left untouched.
    assert_eq!(set.translation("en", "hello"), Some("Hello"));
}

#[test]
fn test_custom_layout_and_delimiter() {
    let temp_dir = TempDir::new().unwrap();
    let res = temp_dir.path().join("res");
    let tsv = temp_dir.path().join("strings.tsv");
    fs::write(&tsv, "key\ten\tpt-rBR\nhello\tHello\tOlá\n").unwrap();

    let options = ConvertOptions::new()
        .with_layout(ResLayout {
            values_prefix: "values-".to_string(),
            strings_filename: "texts.xml".to_string(),
            default_language: Some("en".to_string()),
        })
        .with_delimiter(b'\t')
        .with_header_label("key");
    let codec = Codec::with_options(options);

    codec.csv_to_xml(&tsv, &res).unwrap();
    assert!(res.join("values/texts.xml").is_file());
    assert!(res.join("values-pt-rBR/texts.xml").is_file());

    let back = temp_dir.path().join("back.tsv");
    codec.xml_to_csv(&res, &back).unwrap();
    assert_eq!(
        fs::read_to_string(&back).unwrap(),
        "key\ten\tpt-rBR\nhello\tHello\tOlá\n"
    );
}

#[test]
fn test_malformed_csv_is_reported() {
    let temp_dir = TempDir::new().unwrap();
    let csv = temp_dir.path().join("broken.csv");
    fs::write(&csv, "code \\ language,en,fr\nhello,Hello,Bonjour\nbye,Bye\n").unwrap();

    let err = convert_csv_to_xml(&csv, temp_dir.path().join("res")).unwrap_err();
    match err {
        Error::MalformedMatrix(message) => assert!(message.contains("row 3")),
        other => panic!("expected malformed matrix, got {other:?}"),
    }
}
