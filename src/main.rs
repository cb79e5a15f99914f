use projective_geometry::{rectify, Quadrilateral};

fn main() {
    env_logger::init();
    // Demo: a perspective view of a rectangle, corners clicked clockwise.
    let quad = Quadrilateral::new([
        [120.0, 80.0],
        [520.0, 110.0],
        [560.0, 400.0],
        [90.0, 430.0],
    ]);
    match rectify(&quad) {
        Ok(res) => {
            println!("VP1: {:?}", res.vp1.0.as_slice());
            println!("VP2: {:?}", res.vp2.0.as_slice());
            println!("line at infinity: {:?}", res.line_at_infinity.as_array());
            println!("output bounds: {:?}", res.output_bounds);
        }
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
