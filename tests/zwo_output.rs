//! ZWO workout file output

use zwog::{compile, compile_with_defaults, from_json, render_xml, Metadata};

fn john_dow() -> Metadata {
    Metadata::new("John Dow", "Cat1").with_category("SubCat1")
}

fn zwo(source: &str) -> String {
    compile(source, john_dow()).unwrap().zwo_string()
}

#[test]
fn test_steady_state() {
    insta::assert_snapshot!(zwo("10m @ 50% FTP").trim_end(), @r###"
    <workout_file><author>John Dow</author><name>Cat1</name><description>This workout was generated using ZWOG.

    10m @ 50% FTP</description><sportType>bike</sportType><category>SubCat1</category><workout><SteadyState Duration="600" Power="0.5" /></workout></workout_file>
    "###);
}

#[test]
fn test_intervals_t() {
    assert_eq!(
        zwo("2 x 1m @ 95% FTP, 2m @ 105% FTP"),
        "<workout_file><author>John Dow</author><name>Cat1</name><description>This workout was generated using ZWOG.\n\n\
         2x 1m @ 95% FTP, 2m @ 105% FTP</description><sportType>bike</sportType><category>SubCat1</category>\
         <workout><IntervalsT Repeat=\"2\" OnDuration=\"60\" OnPower=\"0.95\" OffDuration=\"120\" OffPower=\"1.05\" /></workout></workout_file>\n"
    );
}

#[test]
fn test_warmup_and_cooldown() {
    assert_eq!(
        zwo("60s from 40 to 80% FTP 10m @ 80% FTP 10min from 80 to 70% FTP 1h from 70 to 50% FTP"),
        "<workout_file><author>John Dow</author><name>Cat1</name><description>This workout was generated using ZWOG.\n\n\
         1m from 40 to 80% FTP\n10m @ 80% FTP\n10m from 80 to 70% FTP\n1h from 70 to 50% FTP</description>\
         <sportType>bike</sportType><category>SubCat1</category><workout>\
         <Warmup Duration=\"60\" PowerLow=\"0.4\" PowerHigh=\"0.8\" />\
         <SteadyState Duration=\"600\" Power=\"0.8\" />\
         <Ramp Duration=\"600\" PowerLow=\"0.8\" PowerHigh=\"0.7\" />\
         <Cooldown Duration=\"3600\" PowerLow=\"0.7\" PowerHigh=\"0.5\" />\
         </workout></workout_file>\n"
    );
}

#[test]
fn test_repeated_sequence() {
    let ramps = "<Ramp Duration=\"300\" PowerLow=\"0.7\" PowerHigh=\"1.0\" />\
                 <Ramp Duration=\"300\" PowerLow=\"1.0\" PowerHigh=\"0.7\" />";
    let expected = format!(
        "<workout_file><author>John Dow</author><name>Cat1</name><description>This workout was generated using ZWOG.\n\n\
         1m @ 50% FTP\n3x 5m from 70 to 100% FTP, 5m from 100 to 70% FTP\n1m @ 50% FTP</description>\
         <sportType>bike</sportType><category>SubCat1</category><workout>\
         <SteadyState Duration=\"60\" Power=\"0.5\" />{}{}{}<SteadyState Duration=\"60\" Power=\"0.5\" />\
         </workout></workout_file>\n",
        ramps, ramps, ramps
    );
    assert_eq!(
        zwo("1m @ 50% FTP 3x 5 min from 70 to 100% FTP, 5 min from 100 to 70% FTP 1m @ 50% FTP"),
        expected
    );
}

#[test]
fn test_duration_normalization() {
    let document = compile("70s @ 50% FTP", john_dow()).unwrap().zwo();
    assert!(document
        .root()
        .find("description")
        .and_then(|d| d.text())
        .unwrap()
        .ends_with("1m10s @ 50% FTP"));

    let document = compile("2h 70m 70 s @ 50% FTP", john_dow()).unwrap().zwo();
    let segment = &document.root().find("workout").unwrap().children()[0];
    assert_eq!(segment.attr("Duration"), Some("11470"));
    assert!(document.serialize().contains("3h11m10s @ 50% FTP"));
}

#[test]
fn test_default_metadata() {
    let document = compile_with_defaults("1m @ 50% FTP").unwrap().zwo();
    let root = document.root();
    assert_eq!(
        root.find("author").and_then(|e| e.text()),
        Some("Zwift workout generator (https://github.com/tare/zwog)")
    );
    assert_eq!(root.find("name").and_then(|e| e.text()), Some("Structured workout"));
    assert!(root.find("category").is_none());
    assert!(root.find("subcategory").is_none());
}

#[test]
fn test_metadata_is_escaped() {
    let metadata = Metadata::new("Tom & Jerry", "<Sprints>");
    let xml = compile("1m @ 50% FTP", metadata).unwrap().zwo_string();
    assert!(xml.contains("<author>Tom &amp; Jerry</author>"));
    assert!(xml.contains("<name>&lt;Sprints&gt;</name>"));
}

#[test]
fn test_json_and_source_render_identically() {
    let compiled = compile("4x 50s from 10 to 100% FTP 2h @ 90% FTP", john_dow()).unwrap();
    let decoded = from_json(&compiled.to_json().unwrap()).unwrap();
    assert_eq!(
        render_xml(&decoded, compiled.metadata()).serialize(),
        compiled.zwo_string()
    );
}
