extern crate ppmcanvas;

use ppmcanvas::{Canvas,Rgb8};

fn draw_black_frame(canvas: &mut Canvas) {
    let w = canvas.width() as i64;
    let h = canvas.height() as i64;
    for i in 0 .. h {
        canvas.set_pixel(0, i, Rgb8::black()); // Left Side
        canvas.set_pixel(w-1, i, Rgb8::black()); // Right Side
    }
    for i in 0 .. w {
        canvas.set_pixel(i, 0, Rgb8::black()); // Top Side
        canvas.set_pixel(i, h-1, Rgb8::black()); // Bottom Side
    }
}

#[test]
fn t01_rendering_buffer() {
    let mut canvas = Canvas::new(320, 220).unwrap();
    canvas.clear_rect(Rgb8::white());
    draw_black_frame(&mut canvas);

    for i in 0 .. canvas.height() as i64 / 2 {
        canvas.set_pixel(i, i, Rgb8::new(127,200,98));
    }

    assert_eq!(canvas.get_pixel(0, 100), Some(Rgb8::black()));
    assert_eq!(canvas.get_pixel(319, 219), Some(Rgb8::black()));
    assert_eq!(canvas.get_pixel(50, 50), Some(Rgb8::new(127,200,98)));
    assert_eq!(canvas.get_pixel(50, 51), Some(Rgb8::white()));
    assert_eq!(canvas.get_pixel(320, 0), None);

    let buf = canvas.buffer();
    assert_eq!(buf.len(), 320 * 220 * 3);
    assert_eq!(&buf[(50,50)], &[127,200,98]);
    assert_eq!(&buf.data()[(50 * 320 + 50) * 3 ..][..3], &[127,200,98]);
}

#[test]
fn set_then_get_every_pixel() {
    let (w, h) = (17i64, 11i64);
    let mut canvas = Canvas::new(w as usize, h as usize).unwrap();
    let color = |x: i64, y: i64| Rgb8::new((x * 13) as u8, (y * 7) as u8, (x ^ y) as u8);
    for y in 0 .. h {
        for x in 0 .. w {
            canvas.set_pixel(x, y, color(x,y));
        }
    }
    for y in 0 .. h {
        for x in 0 .. w {
            assert_eq!(canvas.get_pixel(x, y), Some(color(x,y)));
            let row = canvas.buffer().row(y as usize);
            assert_eq!(Rgb8::from_slice(&row[x as usize * 3 ..]), color(x,y));
        }
    }
}

#[test]
fn set_pixel_outside_is_ignored() {
    let mut canvas = Canvas::new(4, 4).unwrap();
    for &(x,y) in [(-1,0),(0,-1),(4,0),(0,4),(i64::MAX,i64::MIN)].iter() {
        canvas.set_pixel(x, y, Rgb8::white());
        assert_eq!(canvas.get_pixel(x, y), None);
    }
    assert!(canvas.buffer().data().iter().all(|&v| v == 0));
}
