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
use crate::utils::clamp;
use crate::*;
use std::cmp::max;

#[derive(Copy, Clone, Debug)]
pub(crate) enum ScrollAxis {
    Vertical,
    Horizontal,
}

impl ScrollAxis {
    fn id_key(self) -> &'static str {
        match self {
            ScrollAxis::Vertical => "!scrollbary",
            ScrollAxis::Horizontal => "!scrollbarx",
        }
    }

    fn of_vec(self, v: Vec2i) -> i32 {
        match self {
            ScrollAxis::Vertical => v.y,
            ScrollAxis::Horizontal => v.x,
        }
    }

    fn of_vec_mut(self, v: &mut Vec2i) -> &mut i32 {
        match self {
            ScrollAxis::Vertical => &mut v.y,
            ScrollAxis::Horizontal => &mut v.x,
        }
    }

    fn len(self, r: Recti) -> i32 {
        match self {
            ScrollAxis::Vertical => r.height,
            ScrollAxis::Horizontal => r.width,
        }
    }
}

/// Track of the scrollbar, placed just outside `body` along the axis.
pub(crate) fn scrollbar_base(axis: ScrollAxis, body: Recti, scrollbar_size: i32) -> Recti {
    let mut base = body;
    match axis {
        ScrollAxis::Vertical => {
            base.x = body.x + body.width;
            base.width = scrollbar_size;
        }
        ScrollAxis::Horizontal => {
            base.y = body.y + body.height;
            base.height = scrollbar_size;
        }
    }
    base
}

/// Scroll change for a pointer drag of `delta` across a track of `base`.
pub(crate) fn scrollbar_drag_delta(axis: ScrollAxis, delta: Vec2i, content_len: i32, base: Recti) -> i32 {
    let base_len = axis.len(base);
    if base_len <= 0 {
        return 0;
    }
    axis.of_vec(delta).saturating_mul(content_len) / base_len
}

/// Thumb proportional to the visible fraction of the content, never shorter than `thumb_size`.
pub(crate) fn scrollbar_thumb(axis: ScrollAxis, base: Recti, view_len: i32, content_len: i32, scroll: i32, thumb_size: i32) -> Recti {
    let mut thumb = base;
    let base_len = axis.len(base);
    let max_scroll = content_len - view_len;
    if content_len <= 0 || max_scroll <= 0 {
        return thumb;
    }

    let thumb_len = max(thumb_size, base_len * view_len / content_len);
    let offset = scroll * (base_len - thumb_len) / max_scroll;
    match axis {
        ScrollAxis::Vertical => {
            thumb.height = thumb_len;
            thumb.y += offset;
        }
        ScrollAxis::Horizontal => {
            thumb.width = thumb_len;
            thumb.x += offset;
        }
    }
    thumb
}

impl<M: TextMetrics> Context<M> {
    fn scrollbar(&mut self, slot: usize, body: Recti, content: Vec2i, axis: ScrollAxis) {
        let view_len = axis.len(body);
        let content_len = axis.of_vec(content);
        let max_scroll = content_len - view_len;

        if max_scroll <= 0 || view_len <= 0 {
            *axis.of_vec_mut(&mut self.containers[slot].scroll) = 0;
            return;
        }

        let id = self.get_id(axis.id_key());
        let base = scrollbar_base(axis, body, self.style.scrollbar_size);

        self.update_control(id, base, WidgetOption::NONE);
        if self.focus == Some(id) && self.input.mouse_down.is_only_left() {
            let delta = scrollbar_drag_delta(axis, self.input.mouse_delta, content_len, base);
            *axis.of_vec_mut(&mut self.containers[slot].scroll) += delta;
        }
        let scroll = axis.of_vec_mut(&mut self.containers[slot].scroll);
        *scroll = clamp(*scroll, 0, max_scroll);
        let scroll = *scroll;

        self.draw_frame(base, ControlColor::ScrollBase);
        let thumb = scrollbar_thumb(axis, base, view_len, content_len, scroll, self.style.thumb_size);
        self.draw_frame(thumb, ControlColor::ScrollThumb);

        if self.mouse_over(body) {
            self.scroll_target = Some(slot);
        }
    }

    /// Draws the scrollbars a container needs and returns its body shrunk to make room for them.
    pub(crate) fn scrollbars(&mut self, slot: usize, body: Recti) -> Recti {
        let sz = self.style.scrollbar_size;
        let padding = self.style.padding;
        let prev_body = self.containers[slot].body;
        let mut content = self.containers[slot].content_size;
        content.x += padding * 2;
        content.y += padding * 2;

        self.push_clip_rect(body);
        let mut body = body;
        if content.y > prev_body.height {
            body.width -= sz;
        }
        if content.x > prev_body.width {
            body.height -= sz;
        }
        self.scrollbar(slot, body, content, ScrollAxis::Vertical);
        self.scrollbar(slot, body, content, ScrollAxis::Horizontal);
        self.pop_clip_rect();
        body
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_sits_outside_the_body() {
        let body = rect(0, 0, 100, 50);
        let v = scrollbar_base(ScrollAxis::Vertical, body, 12);
        assert_eq!((v.x, v.y, v.width, v.height), (100, 0, 12, 50));
        let h = scrollbar_base(ScrollAxis::Horizontal, body, 12);
        assert_eq!((h.x, h.y, h.width, h.height), (0, 50, 100, 12));
    }

    #[test]
    fn thumb_is_proportional_and_follows_scroll() {
        let base = rect(100, 0, 12, 100);
        let top = scrollbar_thumb(ScrollAxis::Vertical, base, 100, 400, 0, 8);
        assert_eq!((top.y, top.height), (0, 25));
        let bottom = scrollbar_thumb(ScrollAxis::Vertical, base, 100, 400, 300, 8);
        assert_eq!(bottom.y + bottom.height, 100);
    }

    #[test]
    fn thumb_has_a_minimum_size() {
        let base = rect(0, 100, 100, 12);
        let thumb = scrollbar_thumb(ScrollAxis::Horizontal, base, 100, 100_000, 0, 8);
        assert_eq!(thumb.width, 8);
    }

    #[test]
    fn drag_scales_with_content() {
        let base = rect(100, 0, 12, 100);
        assert_eq!(scrollbar_drag_delta(ScrollAxis::Vertical, vec2(0, 10), 400, base), 40);
        assert_eq!(scrollbar_drag_delta(ScrollAxis::Horizontal, vec2(3, 10), 400, rect(0, 0, 0, 12)), 0);
    }

    #[test]
    fn dragging_the_thumb_scrolls_the_window() {
        let mut ctx = Context::new(FixedMetrics::default());
        let body = |ctx: &mut Context<FixedMetrics>| {
            ctx.window("list", rect(0, 0, 200, 100), ContainerOption::NO_TITLE, |ctx| {
                for i in 0..20 {
                    ctx.label(&format!("row {}", i));
                }
            });
        };
        ctx.frame(body);
        // vertical track is at x 188..200
        ctx.input_mut().mousemove(194, 5);
        ctx.frame(body);
        ctx.frame(body);
        ctx.input_mut().mousedown(194, 5, MouseButton::LEFT);
        ctx.frame(body);
        ctx.input_mut().mousemove(194, 15);
        ctx.frame(body);
        // 10 px of drag over a 100 px track showing 486 px of content
        assert_eq!(ctx.container("list").scroll.y, 48);
    }
}
