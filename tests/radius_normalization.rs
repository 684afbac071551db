use blurbrush::BlurRadius;

#[test]
fn zero_strength_maps_to_floor() {
    let r = BlurRadius::normalize(0.0);
    assert_eq!(r.radius, 32);
    // floor(log2(32)) - 3
    assert_eq!(r.resize_factor, 2);
    assert_eq!(r.working_radius(), 8);
}

#[test]
fn huge_strength_maps_to_ceiling() {
    let r = BlurRadius::normalize(1000.0);
    assert_eq!(
        r,
        BlurRadius {
            radius: 256,
            resize_factor: 5,
        }
    );
    assert_eq!(r.working_radius(), 256 >> 5);
    assert_eq!(r.working_radius(), 8);
}

#[test]
fn table_over_integer_strengths() {
    let table = [
        (1.0, 32, 2, 8),
        (2.0, 64, 3, 8),
        (3.0, 96, 3, 12),
        (4.0, 128, 4, 8),
        (5.0, 160, 4, 10),
        (6.0, 192, 4, 12),
        (7.0, 224, 4, 14),
        (8.0, 256, 5, 8),
        (9.0, 256, 5, 8),
    ];
    for (strength, radius, resize_factor, working) in table {
        let r = BlurRadius::normalize(strength);
        assert_eq!(r.radius, radius, "strength {strength}");
        assert_eq!(r.resize_factor, resize_factor, "strength {strength}");
        assert_eq!(r.working_radius(), working, "strength {strength}");
    }
}

#[test]
fn working_dims_never_collapse() {
    let r = BlurRadius::normalize(8.0);
    assert_eq!(r.working_dims(640, 480), (20, 15));
    assert_eq!(r.working_dims(16, 40), (1, 1));
}
