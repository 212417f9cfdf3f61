extern crate ppmcanvas;

use ppmcanvas::{Canvas,Rgb8};

use std::collections::BTreeSet;

fn painted(canvas: &Canvas) -> BTreeSet<(i64,i64)> {
    let mut out = BTreeSet::new();
    for y in 0 .. canvas.height() as i64 {
        for x in 0 .. canvas.width() as i64 {
            if canvas.get_pixel(x, y) != Some(Rgb8::black()) {
                out.insert((x,y));
            }
        }
    }
    out
}

fn line(x0: i64, y0: i64, x1: i64, y1: i64) -> BTreeSet<(i64,i64)> {
    let mut canvas = Canvas::new(40, 40).unwrap();
    canvas.draw_line(x0, y0, x1, y1, Rgb8::white());
    painted(&canvas)
}

fn assert_connected(pts: &BTreeSet<(i64,i64)>, n: usize) {
    assert_eq!(pts.len(), n);
    let mut v : Vec<_> = pts.iter().cloned().collect();
    let xspan = v.iter().map(|p| p.0).max().unwrap() - v.iter().map(|p| p.0).min().unwrap();
    let yspan = v.iter().map(|p| p.1).max().unwrap() - v.iter().map(|p| p.1).min().unwrap();
    // Order along the driving axis
    if yspan > xspan {
        v.sort_by_key(|&(x,y)| (y,x));
    }
    for w in v.windows(2) {
        let (a,b) = (w[0], w[1]);
        assert!((a.0-b.0).abs() <= 1 && (a.1-b.1).abs() <= 1, "gap between {:?} and {:?}", a, b);
    }
}

#[test_log::test]
fn single_pixel() {
    let pts = line(7, 9, 7, 9);
    assert_eq!(pts.into_iter().collect::<Vec<_>>(), vec![(7,9)]);
}

#[test]
fn horizontal() {
    let pts = line(0, 0, 5, 0);
    assert_eq!(pts.len(), 6);
    assert!(pts.iter().all(|&(x,y)| y == 0 && x >= 0 && x <= 5));
}

#[test]
fn vertical_and_diagonal() {
    let v = line(3, 2, 3, 7);
    assert_connected(&v, 6);
    assert!(v.iter().all(|&(x,_)| x == 3));

    let d = line(1, 1, 4, 4);
    assert_connected(&d, 4);
    assert_eq!(d.into_iter().collect::<Vec<_>>(), vec![(1,1),(2,2),(3,3),(4,4)]);
}

#[test]
fn count_and_symmetry_in_every_direction() {
    let c = (20, 20);
    for dx in -12i64 ..= 12 {
        for dy in -12i64 ..= 12 {
            let (x1,y1) = (c.0 + dx, c.1 + dy);
            let ab = line(c.0, c.1, x1, y1);
            let ba = line(x1, y1, c.0, c.1);
            assert_eq!(ab, ba, "({},{}) -> ({},{})", c.0, c.1, x1, y1);
            let n = std::cmp::max(dx.abs(), dy.abs()) as usize + 1;
            assert_connected(&ab, n);
            assert!(ab.contains(&c));
            assert!(ab.contains(&(x1,y1)));
        }
    }
}

#[test]
fn steep_lines_have_one_pixel_per_row() {
    let pts = line(5, 0, 9, 30);
    for y in 0 ..= 30 {
        assert_eq!(pts.iter().filter(|&&(_,v)| v == y).count(), 1, "row {}", y);
    }
}

#[test]
fn line_partly_outside() {
    let pts = line(-10, 5, 50, 5);
    assert_eq!(pts.len(), 40);
    let pts = line(-10, -10, 10, 10);
    assert_eq!(pts.len(), 11);
}

#[test]
fn thick_lines() {
    let mut canvas = Canvas::new(40, 40).unwrap();
    canvas.draw_thick_line(5, 20, 34, 20, 5, Rgb8::white());
    let pts = painted(&canvas);
    assert_eq!(pts.len(), 30 * 5);
    assert!(pts.iter().all(|&(_,y)| y >= 18 && y <= 22));

    let mut canvas = Canvas::new(40, 40).unwrap();
    canvas.draw_thick_line(5, 5, 30, 30, 3, Rgb8::white());
    let pts = painted(&canvas);
    for x in 5 ..= 30 {
        let col : Vec<_> = pts.iter().filter(|&&(u,_)| u == x).map(|&(_,v)| v).collect();
        assert_eq!(col, vec![x-1, x, x+1], "column {}", x);
    }
}

#[test]
fn thick_line_symmetric() {
    for &(x0,y0,x1,y1) in [(3,4,30,17),(30,2,8,35),(20,20,2,25),(1,38,38,1)].iter() {
        for t in 1 .. 6 {
            let mut a = Canvas::new(40, 40).unwrap();
            let mut b = Canvas::new(40, 40).unwrap();
            a.draw_thick_line(x0, y0, x1, y1, t, Rgb8::white());
            b.draw_thick_line(x1, y1, x0, y0, t, Rgb8::white());
            assert_eq!(a.buffer(), b.buffer());
        }
    }
}
