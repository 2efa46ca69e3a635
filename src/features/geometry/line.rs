use crate::features::geometry::point::Point;

#[derive(Debug,Clone)]
pub struct Line<T> where T: PartialOrd + PartialEq {
    pub points: Vec<Point<T>>
}

// https://en.wikipedia.org/wiki/Bresenham%27s_line_algorithm
pub fn line_bresenham(point_a: &Point<isize>, point_b: &Point<isize>) -> Line<isize> {
    let (mut x0, mut y0) = (point_a.x, point_a.y);
    let (x1, y1) = (point_b.x, point_b.y);

    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    let mut points = Vec::<Point<isize>>::with_capacity((dx.max(-dy) + 1) as usize);
    loop {
        points.push(Point::new(x0, y0));
        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2*err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }

    Line{points}
}
