use crate::{prelude::*, tests::toolkit::*};

#[test]
fn json_round_trip() {
    let rinex = Rinex::from_file(alby_path()).unwrap();
    let content = serde_json::to_string(&rinex).unwrap();
    assert!(content.contains("\"ALBY\""));
    assert!(content.contains("SEPT POLARX5"));

    let decoded: Rinex = serde_json::from_str(&content).unwrap();
    assert_eq!(decoded, rinex);
}
