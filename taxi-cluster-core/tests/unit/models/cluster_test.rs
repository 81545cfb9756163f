use super::*;
use crate::helpers::create_trips;

#[test]
fn can_finalize_center_as_member_mean() {
    let records = create_trips(&[(0., 0.), (2., 2.), (4., 0.), (10., 10.)]);
    let mut cluster = Cluster::new(1);
    [0, 1, 2].iter().for_each(|record_id| cluster.add_member(*record_id));
    assert!(cluster.center().is_none());

    cluster.finalize_center(records.as_slice());

    let center = cluster.center().expect("center is not finalized");
    assert_eq!(center.lat, 2.);
    assert_eq!(center.lon, 2. / 3.);
}

#[test]
fn can_keep_members_in_absorption_order() {
    let mut cluster = Cluster::new(3);

    [5, 1, 4].iter().for_each(|record_id| cluster.add_member(*record_id));

    assert_eq!(cluster.label(), 3);
    assert_eq!(cluster.size(), 3);
    assert_eq!(cluster.members(), &[5, 1, 4]);
}
