use super::*;

#[test]
fn fits_checks_every_dimension() {
    let have = NodeResources::new(4.0, 8192, 10240);
    assert!(have.fits(&NodeResources::new(2.0, 4096, 1024)));
    assert!(!have.fits(&NodeResources::new(5.0, 0, 0)));
    assert!(!have.fits(&NodeResources::new(0.0, 9000, 0)));
}

#[test]
fn saturating_sub_never_goes_negative() {
    let have = NodeResources::new(1.0, 100, 100);
    let after = have.saturating_sub(&NodeResources::new(5.0, 500, 500));
    assert_eq!(after, NodeResources::ZERO);
}

#[test]
fn add_sums_each_dimension() {
    let a = NodeResources::new(1.0, 100, 200);
    let b = NodeResources::new(2.0, 300, 400);
    assert_eq!(a + b, NodeResources::new(3.0, 400, 600));
}
