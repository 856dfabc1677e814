use settle::{Spring, Spring32, TickOverrides, Value};

#[test]
fn spring_deterministic() {
    let results: Vec<_> = (0..10).map(|_| {
        let mut spring: Spring32 = Spring::new(0.15, 0.3, [1.0, 2.0, 3.0]).unwrap();
        spring.set_destination([10.0, -5.0, 0.25]).unwrap();
        for _ in 0..37 {
            spring.tick();
        }
        spring.current_value()
    }).collect();

    for r in &results[1..] {
        assert_eq!(&results[0], r);
    }
}

#[test]
fn tick_and_tick_into_agree() {
    let mut by_value: Spring32 = Spring::new(0.2, 0.4, [0.0, 0.0, 0.0, 0.0]).unwrap();
    let mut by_buffer = by_value.clone();
    by_value.set_destination([1.0, 2.0, 3.0, 4.0]).unwrap();
    by_buffer.set_destination([1.0, 2.0, 3.0, 4.0]).unwrap();

    let mut out = [0.0f32; 4];
    for _ in 0..200 {
        let value = by_value.tick();
        by_buffer.tick_into(&mut out, TickOverrides::none()).unwrap();
        assert_eq!(value, Value::Vec4(out));
    }
}

#[test]
fn overriding_with_own_tunables_changes_nothing() {
    let mut plain: Spring32 = Spring::new(0.2, 0.4, 0.0).unwrap();
    let mut overridden = plain.clone();
    plain.set_destination(3.0).unwrap();
    overridden.set_destination(3.0).unwrap();

    let overrides = TickOverrides::none().with_stiffness(0.2).with_dampening(0.4);
    for _ in 0..100 {
        assert_eq!(plain.tick(), overridden.tick_with(overrides));
    }
}
