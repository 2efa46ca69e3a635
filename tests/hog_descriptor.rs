use hog::{HogDescriptor, CellBins};

#[test]
fn default_shape() {
    let desc = HogDescriptor::default();
    assert_eq!((desc.num_rows(), desc.num_cols(), desc.cell_num_bins()), (8, 8, 8));
    assert_eq!(desc.data_store_size(), 512);
    assert!(desc.cells().all(|c| c.is_zero()));
}

#[test]
fn cells_are_row_major() {
    let data = (0..24).map(|v| v as f64).collect::<Vec<_>>();
    let desc = HogDescriptor::from_data(2, 3, 4, data);
    assert_eq!(desc.num_cells(), 6);
    assert_eq!(desc.cell(0, 0).bins(), &[0.0, 1.0, 2.0, 3.0]);
    assert_eq!(desc.cell(0, 2).bins(), &[8.0, 9.0, 10.0, 11.0]);
    assert_eq!(desc.cell(1, 0).bins(), &[12.0, 13.0, 14.0, 15.0]);
    let firsts = desc.cells().map(|c| c.bin(0)).collect::<Vec<_>>();
    assert_eq!(firsts, vec![0.0, 4.0, 8.0, 12.0, 16.0, 20.0]);
}

#[test]
fn wrong_length_data_heals_to_zero() {
    let desc = HogDescriptor::from_data(2, 2, 4, vec![1.0; 10]);
    assert_eq!(desc.data_store_size(), 16);
    assert_eq!(desc.as_slice().len(), 16);
    for r in 0..2 {
        for c in 0..2 {
            assert_eq!(desc.cell(r, c).sum(), 0.0);
        }
    }
}

#[test]
fn clone_does_not_alias() {
    let original = HogDescriptor::from_data(1, 2, 2, vec![1.0, 2.0, 3.0, 4.0]);
    let mut copy = original.clone();
    copy.cell_mut(0, 1).zero();
    assert_eq!(original.cell(0, 1).bins(), &[3.0, 4.0]);
    assert_eq!(copy.cell(0, 1).bins(), &[0.0, 0.0]);

    let mut assigned = HogDescriptor::new(3, 3, 3);
    assigned.copy_from(&original);
    assert_eq!(assigned, original);
    assigned.zero();
    assert_eq!(original.cell(0, 0).sum(), 3.0);
}

#[test]
fn reshape() {
    let mut desc = HogDescriptor::from_data(1, 2, 2, vec![1.0, 2.0, 3.0, 4.0]);
    desc.reshape(1, 2, 2);
    assert_eq!(desc.as_slice(), &[1.0, 2.0, 3.0, 4.0]);

    desc.reshape(2, 3, 5);
    assert_eq!(desc.data_store_size(), 30);
    assert_eq!(desc.cell(1, 2).num_bins(), 5);
    assert!(desc.cells().all(|c| c.is_zero()));
}

#[test]
#[should_panic]
fn out_of_range_row_panics() {
    let desc = HogDescriptor::new(2, 2, 4);
    desc.cell(2, 0);
}

#[test]
#[should_panic]
fn out_of_range_col_panics() {
    let mut desc = HogDescriptor::new(2, 2, 4);
    desc.cell_mut(0, 2);
}

#[test]
fn yaml_round_trip_and_healing() {
    let desc = HogDescriptor::from_data(1, 1, 2, vec![0.25, 0.75]);
    let s = serde_yaml::to_string(&desc).unwrap();
    let back: HogDescriptor = serde_yaml::from_str(&s).unwrap();
    assert_eq!(back, desc);

    let broken = "num_rows: 2\nnum_cols: 2\ncell_num_bins: 4\ndata: [1.0, 2.0]\n";
    let healed: HogDescriptor = serde_yaml::from_str(broken).unwrap();
    assert_eq!(healed.as_slice(), &[0.0; 16][..]);
}
