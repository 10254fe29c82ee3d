use vectormaster::{Direction, Error, Value, Vector2D, Vector3D, VectorRGB};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn add_vectors() -> anyhow::Result<()> {
    init_logger();

    let mut a = Vector3D::new(4.5, 3.2, 5.6);
    let b = Vector3D::new(3.0, 5.0, 10.0);
    a.add(b)?;
    assert_eq!(a, Vector3D::new(7.5, 8.2, 15.6));
    assert_eq!(b, Vector3D::new(3.0, 5.0, 10.0));
    Ok(())
}

#[test]
fn mixed_operands() -> anyhow::Result<()> {
    init_logger();

    let mut a = Vector3D::load(&[4.5.into(), 3.2.into(), 5.6.into()])?;
    a.add(Vector3D::load(&[3.into(), 5.into(), 10.into()])?)?;
    a.add(5)?;
    assert_eq!(a.add(1)?, [13.5, 14.2, 21.6]);
    a.add([1, 3, 5])?;
    assert_eq!(a, Vector3D::new(14.5, 17.2, 26.6));
    a.sub([3, 4, 5])?;
    assert_eq!(a.to_array(), [11.5, 13.2, 21.6]);
    Ok(())
}

#[test]
fn cross_unit_axes() -> anyhow::Result<()> {
    init_logger();

    let mut x = Vector3D::new(1.0, 0.0, 0.0);
    assert_eq!(x.cross(Vector3D::new(0.0, 1.0, 0.0))?, [0.0, 0.0, 1.0]);
    assert_eq!(x, Vector3D::new(0.0, 0.0, 1.0));
    Ok(())
}

#[test]
fn divide_by_zero() {
    init_logger();

    let mut v = Vector2D::new(4.0, 4.0);
    assert_eq!(v.div(0), Err(Error::DivisionByZero));
    assert_eq!(v.div(0.0), Err(Error::DivisionByZero));
    assert_eq!(v.div([2, 0]), Err(Error::DivisionByZero));
    assert_eq!(v, Vector2D::new(4.0, 4.0));
}

#[test]
fn subdivide_with_endpoints() {
    init_logger();

    let a = Vector2D::new(5.0, 10.0);
    let b = Vector2D::new(10.0, 20.0);
    let points: Vec<_> = a.subdivide(&b, 1, Direction::Forward, true).collect();
    assert_eq!(
        points,
        [
            Vector2D::new(5.0, 10.0),
            Vector2D::new(7.5, 15.0),
            Vector2D::new(10.0, 20.0),
        ]
    );
}

#[test]
fn construction() -> anyhow::Result<()> {
    init_logger();

    let v = Vector3D::load(&[1.into(), 2.into(), 3.into()])?;
    assert_eq!(v.to_array(), [1.0, 2.0, 3.0]);

    let err = Vector3D::load(&[vec![1, 2].into()]).unwrap_err();
    assert_eq!(
        err,
        Error::Argument {
            expected: 3,
            received: "([1, 2])".into()
        }
    );
    assert_eq!(
        err.to_string(),
        "expected 3 numeric values (or one sequence of 3), got ([1, 2])"
    );

    let text = [Value::from("x"), 1.into(), 2.into()];
    assert!(Vector3D::load(&text).is_err());
    Ok(())
}

#[test]
fn dimension_mismatch() {
    init_logger();

    let mut v = Vector3D::new(1.0, 2.0, 3.0);
    assert_eq!(
        v.mul(vec![1.0, 2.0, 3.0, 4.0]),
        Err(Error::DimensionMismatch {
            expected: 3,
            found: 4
        })
    );
    assert_eq!(v, Vector3D::new(1.0, 2.0, 3.0));
}

#[test]
fn shapes_do_not_mix() {
    init_logger();

    let mut v = Vector3D::new(1.0, 2.0, 3.0);
    let c = VectorRGB::new(1.0, 2.0, 3.0);

    assert!(matches!(v.dot(c), Err(Error::TypeMismatch { .. })));
    assert!(matches!(v.equals(c), Err(Error::TypeMismatch { .. })));
    assert!(matches!(v.cross(c), Err(Error::TypeMismatch { .. })));
    assert!(matches!(v.add(c), Err(Error::UnsupportedOperand { .. })));
    assert!(matches!(v.add("1"), Err(Error::UnsupportedOperand { .. })));
    assert_eq!(v, Vector3D::new(1.0, 2.0, 3.0));
}

#[test]
fn conversions() {
    init_logger();

    let v = Vector2D::new(5.0, 4.0);
    let array: [f64; 2] = v.into();
    assert_eq!(array, [5.0, 4.0]);
    assert_eq!(Vector2D::from([5.0, 4.0]), v);
    assert_eq!(v.into_iter().sum::<f64>(), 9.0);
    assert_eq!(v.to_map().get("y"), Some(&4.0));
    assert_eq!(v.to_string(), "X: 5, Y: 4");
}
