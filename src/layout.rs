//
// Copyright 2022-Present (c) Raja Lehtihet & Wael El Oraiby
//
// Redistribution and use in source and binary forms, with or without
// modification, are permitted provided that the following conditions are met:
//
// 1. Redistributions of source code must retain the above copyright notice,
// this list of conditions and the following disclaimer.
//
// 2. Redistributions in binary form must reproduce the above copyright notice,
// this list of conditions and the following disclaimer in the documentation
// and/or other materials provided with the distribution.
//
// 3. Neither the name of the copyright holder nor the names of its contributors
// may be used to endorse or promote products derived from this software without
// specific prior written permission.
//
// THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
// AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
// IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE
// ARE DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE
// LIABLE FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR
// CONSEQUENTIAL DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF
// SUBSTITUTE GOODS OR SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS
// INTERRUPTION) HOWEVER CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN
// CONTRACT, STRICT LIABILITY, OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE)
// ARISING IN ANY WAY OUT OF THE USE OF THIS SOFTWARE, EVEN IF ADVISED OF THE
// POSSIBILITY OF SUCH DAMAGE.
//
// -----------------------------------------------------------------------------
// Ported to rust from https://github.com/rxi/microui/ and the original license
//
// Copyright (c) 2020 rxi
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to
// deal in the Software without restriction, including without limitation the
// rights to use, copy, modify, merge, publish, distribute, sublicense, and/or
// sell copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING
// FROM, OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS
// IN THE SOFTWARE.
//
use super::*;
use crate::error::{fatal, ContractViolation};
use std::cmp::max;

/// Override for the next cell, set with [`Context::layout_set_next`].
#[derive(Copy, Clone)]
enum NextCell {
    /// Screen coordinates; the cursor does not move.
    Absolute(Recti),
    /// Relative to the layout body; the cursor advances past it.
    Relative(Recti),
}

#[derive(Clone)]
struct Layout {
    body: Recti,
    position: Vec2i,
    size: Vec2i,
    max: Option<Vec2i>,
    widths: Vec<i32>,
    item_index: usize,
    next_row: i32,
    indent: i32,
    next: Option<NextCell>,
}

impl Layout {
    fn new(body: Recti, scroll: Vec2i) -> Self {
        Self {
            body: rect(body.x - scroll.x, body.y - scroll.y, body.width, body.height),
            position: vec2(0, 0),
            size: vec2(0, 0),
            max: None,
            widths: vec![0],
            item_index: 0,
            next_row: 0,
            indent: 0,
            next: None,
        }
    }

    fn row(&mut self, widths: &[i32], height: i32) {
        self.widths.clear();
        self.widths.extend_from_slice(widths);
        self.wrap(height);
    }

    // Starts a new row with the current template.
    fn wrap(&mut self, height: i32) {
        self.size.y = height;
        self.item_index = 0;
        self.position = vec2(self.indent, self.next_row);
    }

    // Width of column `index`. Non-positive entries split the room left after the indent,
    // the fixed columns and the spacing; the last of them takes the rounding remainder.
    fn column_width(&self, index: usize, spacing: i32) -> i32 {
        let width = self.widths[index];
        if width > 0 {
            return width;
        }
        let fixed: i32 = self.widths.iter().filter(|w| **w > 0).sum();
        let gaps = spacing * (self.widths.len() as i32 - 1);
        let remaining = max(self.body.width - self.indent - fixed - gaps, 0);
        let stretch = self.widths.iter().filter(|w| **w <= 0).count() as i32;
        let share = remaining / stretch;
        let is_last = self.widths[index + 1..].iter().all(|w| *w > 0);
        if is_last { remaining - share * (stretch - 1) } else { share }
    }

    fn fold_max(&mut self, r: Recti) {
        let corner = vec2(r.x + r.width, r.y + r.height);
        self.max = Some(match self.max {
            None => corner,
            Some(m) => vec2(max(m.x, corner.x), max(m.y, corner.y)),
        });
    }
}

/// Stack of layout records for the containers and columns currently open.
pub(crate) struct LayoutManager {
    stack: Vec<Layout>,
    capacity: usize,
    spacing: i32,
    default_height: i32,
    last_rect: Recti,
}

impl LayoutManager {
    pub fn new(capacity: usize) -> Self { Self { stack: Vec::with_capacity(capacity), capacity, spacing: 0, default_height: 0, last_rect: Recti::default() } }

    /// Spacing between cells and the height of cells in rows declared with a non-positive height.
    pub fn set_metrics(&mut self, spacing: i32, default_height: i32) {
        self.spacing = spacing;
        self.default_height = default_height;
    }

    pub fn depth(&self) -> usize { self.stack.len() }

    pub fn last_rect(&self) -> Recti { self.last_rect }

    fn top(&self) -> &Layout {
        match self.stack.last() {
            Some(layout) => layout,
            None => fatal(ContractViolation::EmptyStack { stack: "layout" }),
        }
    }

    fn top_mut(&mut self) -> &mut Layout {
        match self.stack.last_mut() {
            Some(layout) => layout,
            None => fatal(ContractViolation::EmptyStack { stack: "layout" }),
        }
    }

    pub fn push(&mut self, body: Recti, scroll: Vec2i) {
        if self.stack.len() >= self.capacity {
            fatal(ContractViolation::StackOverflow { stack: "layout", capacity: self.capacity });
        }
        self.stack.push(Layout::new(body, scroll));
    }

    pub fn pop(&mut self) -> Option<(Recti, Option<Vec2i>)> { self.stack.pop().map(|layout| (layout.body, layout.max)) }

    pub fn current_body(&self) -> Recti { self.top().body }

    pub fn adjust_indent(&mut self, delta: i32) { self.top_mut().indent += delta; }

    pub fn row(&mut self, widths: &[i32], height: i32) { self.top_mut().row(widths, height); }

    pub fn set_width(&mut self, width: i32) { self.top_mut().size.x = width; }

    pub fn set_height(&mut self, height: i32) { self.top_mut().size.y = height; }

    pub fn set_next(&mut self, r: Recti, relative: bool) { self.top_mut().next = Some(if relative { NextCell::Relative(r) } else { NextCell::Absolute(r) }); }

    pub fn next(&mut self) -> Recti {
        let spacing = self.spacing;
        let default_height = self.default_height;
        let next = self.top_mut().next.take();
        if let Some(NextCell::Absolute(r)) = next {
            self.last_rect = r;
            return r;
        }

        let layout = self.top_mut();
        let mut res = match next {
            Some(NextCell::Relative(r)) => r,
            _ => {
                if layout.item_index == layout.widths.len() {
                    let height = layout.size.y;
                    layout.wrap(height);
                }
                let mut r = rect(layout.position.x, layout.position.y, 0, layout.size.y);
                r.width = if !layout.widths.is_empty() {
                    layout.column_width(layout.item_index, spacing)
                } else if layout.size.x > 0 {
                    layout.size.x
                } else {
                    max(layout.body.width - r.x, 0)
                };
                if r.height <= 0 {
                    r.height = default_height;
                }
                layout.item_index += 1;
                r
            }
        };

        layout.position.x += res.width + spacing;
        layout.next_row = max(layout.next_row, res.y + res.height + spacing);

        res.x += layout.body.x;
        res.y += layout.body.y;
        layout.fold_max(res);

        self.last_rect = res;
        res
    }

    pub fn begin_column(&mut self) {
        let cell = self.next();
        self.push(cell, vec2(0, 0));
    }

    pub fn end_column(&mut self) {
        let finished = match self.stack.pop() {
            Some(layout) => layout,
            None => fatal(ContractViolation::EmptyStack { stack: "layout" }),
        };
        let parent = self.top_mut();

        parent.position.x = max(parent.position.x, finished.position.x + finished.body.x - parent.body.x);
        parent.next_row = max(parent.next_row, finished.next_row + finished.body.y - parent.body.y);
        if let Some(m) = finished.max {
            parent.fold_max(rect(m.x, m.y, 0, 0));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manager(body: Recti) -> LayoutManager {
        let mut lm = LayoutManager::new(4);
        lm.set_metrics(4, 20);
        lm.push(body, vec2(0, 0));
        lm
    }

    fn tuple(r: Recti) -> (i32, i32, i32, i32) { (r.x, r.y, r.width, r.height) }

    #[test]
    fn default_row_fills_the_body() {
        let mut lm = manager(rect(5, 29, 290, 166));
        assert_eq!(tuple(lm.next()), (5, 29, 290, 20));
        assert_eq!(tuple(lm.next()), (5, 53, 290, 20));
    }

    #[test]
    fn fixed_widths_wrap_after_the_template() {
        let mut lm = manager(rect(0, 0, 300, 200));
        lm.row(&[60, 80], 0);
        assert_eq!(tuple(lm.next()), (0, 0, 60, 20));
        assert_eq!(tuple(lm.next()), (64, 0, 80, 20));
        assert_eq!(tuple(lm.next()), (0, 24, 60, 20));
    }

    #[test]
    fn stretch_columns_share_remaining_width() {
        let mut lm = manager(rect(0, 0, 103, 100));
        lm.row(&[-1, 20, 0], 10);
        // 103 - 20 - 2 * 4 = 75, split 37 / 38
        let a = lm.next();
        let b = lm.next();
        let c = lm.next();
        assert_eq!(tuple(a), (0, 0, 37, 10));
        assert_eq!(tuple(b), (41, 0, 20, 10));
        assert_eq!(tuple(c), (65, 0, 38, 10));
        assert_eq!(c.x + c.width, 103);
    }

    #[test]
    fn stretch_never_goes_negative() {
        let mut lm = manager(rect(0, 0, 50, 100));
        lm.row(&[40, 40, -1], 0);
        lm.next();
        lm.next();
        assert_eq!(lm.next().width, 0);
    }

    #[test]
    fn indent_shifts_rows_and_shrinks_stretch() {
        let mut lm = manager(rect(0, 0, 200, 100));
        lm.adjust_indent(24);
        lm.row(&[-1], 0);
        assert_eq!(tuple(lm.next()), (24, 0, 176, 20));
    }

    #[test]
    fn scroll_offsets_the_body() {
        let mut lm = LayoutManager::new(2);
        lm.set_metrics(4, 20);
        lm.push(rect(0, 100, 100, 100), vec2(0, 30));
        assert_eq!(tuple(lm.next()), (0, 70, 100, 20));
    }

    #[test]
    fn columns_advance_the_parent_cursor() {
        let mut lm = manager(rect(0, 0, 300, 300));
        lm.row(&[100, -1], 0);
        lm.begin_column();
        lm.next();
        lm.next();
        lm.next();
        lm.end_column();
        let right = lm.next();
        assert_eq!((right.x, right.y), (104, 0));
        // three cells of 20 + 4 spacing inside the column
        assert_eq!(tuple(lm.next()), (0, 72, 100, 20));
        let (_, max) = lm.pop().unwrap();
        assert_eq!(max.unwrap().y, 92);
    }

    #[test]
    fn absolute_next_does_not_move_the_cursor() {
        let mut lm = manager(rect(0, 0, 100, 100));
        lm.set_next(rect(500, 500, 10, 10), false);
        assert_eq!(tuple(lm.next()), (500, 500, 10, 10));
        assert_eq!(tuple(lm.next()), (0, 0, 100, 20));
    }

    #[test]
    fn relative_next_is_offset_by_the_body() {
        let mut lm = manager(rect(10, 10, 100, 100));
        lm.set_next(rect(5, 5, 10, 10), true);
        assert_eq!(tuple(lm.next()), (15, 15, 10, 10));
        assert_eq!(tuple(lm.last_rect()), (15, 15, 10, 10));
    }

    #[test]
    fn empty_template_flows_with_layout_width() {
        let mut lm = manager(rect(0, 0, 100, 100));
        lm.row(&[], 0);
        lm.set_width(30);
        assert_eq!(tuple(lm.next()), (0, 0, 30, 20));
        assert_eq!(tuple(lm.next()), (34, 0, 30, 20));
        lm.set_width(0);
        assert_eq!(tuple(lm.next()), (68, 0, 32, 20));
    }

    #[test]
    #[should_panic(expected = "layout stack overflow")]
    fn nesting_past_capacity_is_fatal() {
        let mut lm = manager(rect(0, 0, 100, 100));
        for _ in 0..4 {
            lm.begin_column();
        }
    }
}
