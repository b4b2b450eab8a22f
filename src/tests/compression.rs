use crate::{prelude::*, tests::toolkit::*};

#[test]
fn gzip_observation_file() {
    let plain = Rinex::from_file(alby_path()).unwrap();
    let compressed = Rinex::from_gzip_file(format!("{}.gz", alby_path())).unwrap();
    assert_eq!(plain, compressed);

    let epochs = Epochs::from_gzip_file(format!("{}.gz", alby_path())).unwrap();
    assert_eq!(epochs.count(), 4);
}
