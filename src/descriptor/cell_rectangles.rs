use crate::Float;
use crate::descriptor::hog_descriptor::HogDescriptor;
use crate::features::geometry::rect::Rect;

/// Divides a bounding rectangle into num_rows x num_cols cell rectangles of nearly equal size.
///
/// Cell edges are tracked as exact fractional coordinates and only rounded down at the last moment, so the
/// rounding error of one cell is carried into the next one. The last row and column always end on the bounding
/// rectangle, so the cells tile it without gaps or overlaps and differ in size by at most one pixel.
#[derive(Debug,Clone,PartialEq,Default)]
pub struct HogCellRectangles {
    num_rows: usize,
    num_cols: usize,
    image_rect: Rect,
    cell_rects: Vec<Rect>
}

impl HogCellRectangles {

    pub fn new(num_rows: usize, num_cols: usize, image_rect: Rect) -> HogCellRectangles {
        let cell_rects = partition(num_rows, num_cols, &image_rect);
        HogCellRectangles{num_rows, num_cols, image_rect, cell_rects}
    }

    pub fn for_descriptor(hog_descriptor: &HogDescriptor, image_rect: Rect) -> HogCellRectangles {
        HogCellRectangles::new(hog_descriptor.num_rows(), hog_descriptor.num_cols(), image_rect)
    }

    pub fn for_image_size(hog_descriptor: &HogDescriptor, width: usize, height: usize) -> HogCellRectangles {
        HogCellRectangles::for_descriptor(hog_descriptor, Rect::from_size(width, height))
    }

    pub fn num_rows(&self) -> usize { self.num_rows }
    pub fn num_cols(&self) -> usize { self.num_cols }
    pub fn num_cells(&self) -> usize { self.num_rows*self.num_cols }

    pub fn image_rect(&self) -> &Rect { &self.image_rect }
    pub fn image_width(&self) -> usize { self.image_rect.width }
    pub fn image_height(&self) -> usize { self.image_rect.height }

    pub fn rect(&self, row: usize, col: usize) -> &Rect {
        assert!(row < self.num_rows && col < self.num_cols, "cell rectangle ({},{}) out of range for a {}x{} grid", row, col, self.num_rows, self.num_cols);
        &self.cell_rects[row*self.num_cols + col]
    }

    /// All rectangles in row-major order.
    pub fn iter(&self) -> std::slice::Iter<'_, Rect> {
        self.cell_rects.iter()
    }
}

fn partition(num_rows: usize, num_cols: usize, image_rect: &Rect) -> Vec<Rect> {
    let mut cell_rects = Vec::<Rect>::with_capacity(num_rows*num_cols);
    if num_rows == 0 || num_cols == 0 {
        return cell_rects;
    }

    let heights = diffused_lengths(image_rect.height, num_rows);
    let widths = diffused_lengths(image_rect.width, num_cols);

    let mut y0 = 0;
    for &cell_height in &heights {
        let mut x0 = 0;
        for &cell_width in &widths {
            cell_rects.push(Rect::new(x0 + image_rect.x, y0 + image_rect.y, cell_width, cell_height));
            x0 += cell_width;
        }
        y0 += cell_height;
    }

    cell_rects
}

/// Splits total into count integer lengths by error diffusion along one axis.
fn diffused_lengths(total: usize, count: usize) -> Vec<usize> {
    let cell_length = total as Float / count as Float;
    let mut lengths = Vec::<usize>::with_capacity(count);
    let mut edge = cell_length;
    let mut start = 0;

    for i in 0..count {
        let length = match i < count - 1 {
            true => ((edge - start as Float) as usize).min(total - start),
            false => total - start
        };
        lengths.push(length);
        start += length;
        edge += cell_length;
    }

    lengths
}
