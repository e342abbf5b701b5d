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
use crate::error::{fatal, ContractViolation};
use crate::utils::{intersect_rect, rect_inside, rect_overlaps};
use crate::*;

/// Classifies `r` against the clip rectangle `cr`.
pub(crate) fn clip_kind(r: Recti, cr: Recti) -> Clip {
    if !rect_overlaps(r, cr) {
        return Clip::All;
    }
    if rect_inside(r, cr) {
        return Clip::None;
    }
    Clip::Part
}

pub(crate) struct DrawCtx<'a, M: TextMetrics> {
    commands: &'a mut CommandList,
    clip_stack: &'a mut Vec<Recti>,
    clip_capacity: usize,
    style: &'a Style,
    metrics: &'a M,
}

impl<'a, M: TextMetrics> DrawCtx<'a, M> {
    pub(crate) fn new(commands: &'a mut CommandList, clip_stack: &'a mut Vec<Recti>, clip_capacity: usize, style: &'a Style, metrics: &'a M) -> Self {
        Self { commands, clip_stack, clip_capacity, style, metrics }
    }

    pub(crate) fn current_clip_rect(&self) -> Recti { self.clip_stack.last().copied().unwrap_or(UNCLIPPED_RECT) }

    /// Pushes `rect` verbatim, without intersecting it with the parent clip.
    pub(crate) fn push_raw_clip_rect(&mut self, rect: Recti) {
        if self.clip_stack.len() >= self.clip_capacity {
            fatal(ContractViolation::StackOverflow { stack: "clip", capacity: self.clip_capacity });
        }
        self.clip_stack.push(rect);
    }

    pub(crate) fn push_clip_rect(&mut self, rect: Recti) {
        let last = self.current_clip_rect();
        self.push_raw_clip_rect(intersect_rect(rect, last));
    }

    pub(crate) fn pop_clip_rect(&mut self) {
        if self.clip_stack.pop().is_none() {
            fatal(ContractViolation::EmptyStack { stack: "clip" });
        }
    }

    pub(crate) fn set_clip(&mut self, rect: Recti) { self.commands.push(Command::Clip { rect }); }

    pub(crate) fn check_clip(&self, r: Recti) -> Clip { clip_kind(r, self.current_clip_rect()) }

    pub(crate) fn draw_rect(&mut self, rect: Recti, color: Color) {
        let rect = intersect_rect(rect, self.current_clip_rect());
        if rect.width > 0 && rect.height > 0 {
            self.commands.push(Command::Rect { rect, color });
        }
    }

    pub(crate) fn draw_box(&mut self, r: Recti, color: Color) {
        self.draw_rect(rect(r.x + 1, r.y, r.width - 2, 1), color);
        self.draw_rect(rect(r.x + 1, r.y + r.height - 1, r.width - 2, 1), color);
        self.draw_rect(rect(r.x, r.y, 1, r.height), color);
        self.draw_rect(rect(r.x + r.width - 1, r.y, 1, r.height), color);
    }

    // Emits `cmd` bracketed by clip commands when `r` is only partly visible.
    fn push_clipped(&mut self, r: Recti, cmd: Command) {
        let clipped = self.check_clip(r);
        match clipped {
            Clip::All => return,
            Clip::Part => {
                let clip = self.current_clip_rect();
                self.set_clip(clip)
            }
            Clip::None => (),
        }
        self.commands.push(cmd);
        if clipped != Clip::None {
            self.set_clip(UNCLIPPED_RECT);
        }
    }

    pub(crate) fn draw_text(&mut self, text: &str, pos: Vec2i, color: Color) {
        let r = rect(pos.x, pos.y, self.metrics.text_width(text), self.metrics.line_height());
        self.push_clipped(r, Command::Text { pos, color, text: String::from(text) });
    }

    pub(crate) fn draw_icon(&mut self, id: IconId, rect: Recti, color: Color) { self.push_clipped(rect, Command::Icon { rect, id, color }); }

    pub(crate) fn draw_frame(&mut self, rect: Recti, colorid: ControlColor) {
        let color = self.style.color(colorid);
        self.draw_rect(rect, color);
        if colorid == ControlColor::ScrollBase || colorid == ControlColor::ScrollThumb || colorid == ControlColor::TitleBG {
            return;
        }
        let border_color = self.style.color(ControlColor::Border);
        if border_color.a != 0 {
            self.draw_box(expand_rect(rect, 1), border_color);
        }
    }

    pub(crate) fn draw_control_frame(&mut self, focused: bool, hovered: bool, rect: Recti, mut colorid: ControlColor, opt: WidgetOption) {
        if opt.has_no_frame() {
            return;
        }
        if focused {
            colorid.focus()
        } else if hovered {
            colorid.hover()
        }
        self.draw_frame(rect, colorid);
    }

    pub(crate) fn draw_control_text(&mut self, text: &str, rect: Recti, colorid: ControlColor, opt: WidgetOption) {
        let text_width = self.metrics.text_width(text);
        let padding = self.style.padding;
        let color = self.style.color(colorid);

        self.push_clip_rect(rect);
        let y = rect.y + (rect.height - self.metrics.line_height()) / 2;
        let x = if opt.is_aligned_center() {
            rect.x + (rect.width - text_width) / 2
        } else if opt.is_aligned_right() {
            rect.x + rect.width - text_width - padding
        } else {
            rect.x + padding
        };
        self.draw_text(text, vec2(x, y), color);
        self.pop_clip_rect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixture {
        commands: CommandList,
        clip_stack: Vec<Recti>,
        style: Style,
        metrics: FixedMetrics,
    }

    impl Fixture {
        fn new() -> Self { Self { commands: CommandList::new(64), clip_stack: Vec::new(), style: Style::default(), metrics: FixedMetrics::default() } }

        fn draw(&mut self) -> DrawCtx<'_, FixedMetrics> { DrawCtx::new(&mut self.commands, &mut self.clip_stack, 4, &self.style, &self.metrics) }
    }

    #[test]
    fn nested_clips_intersect() {
        let mut fx = Fixture::new();
        let mut draw = fx.draw();
        draw.push_clip_rect(rect(0, 0, 100, 100));
        draw.push_clip_rect(rect(50, 50, 100, 100));
        let top = draw.current_clip_rect();
        assert_eq!((top.x, top.y, top.width, top.height), (50, 50, 50, 50));
        draw.push_clip_rect(rect(200, 200, 10, 10));
        assert_eq!(draw.current_clip_rect().width, 0);
        assert_eq!(draw.check_clip(rect(60, 60, 5, 5)), Clip::All);
        draw.pop_clip_rect();
        assert_eq!(draw.check_clip(rect(60, 60, 5, 5)), Clip::None);
        assert_eq!(draw.check_clip(rect(90, 90, 20, 20)), Clip::Part);
        assert_eq!(draw.check_clip(rect(0, 0, 10, 10)), Clip::All);
    }

    #[test]
    fn rects_are_clipped_and_dropped_when_invisible() {
        let mut fx = Fixture::new();
        {
            let mut draw = fx.draw();
            draw.push_clip_rect(rect(0, 0, 10, 10));
            draw.draw_rect(rect(5, 5, 10, 10), color(1, 2, 3, 4));
            draw.draw_rect(rect(20, 20, 10, 10), color(1, 2, 3, 4));
            draw.pop_clip_rect();
        }
        assert_eq!(fx.commands.len(), 1);
        match fx.commands.get(0) {
            Some(Command::Rect { rect, .. }) => assert_eq!((rect.x, rect.y, rect.width, rect.height), (5, 5, 5, 5)),
            _ => panic!("expected a rect command"),
        }
    }

    #[test]
    fn partially_visible_text_is_bracketed_by_clips() {
        let mut fx = Fixture::new();
        {
            let mut draw = fx.draw();
            draw.push_clip_rect(rect(0, 0, 20, 20));
            draw.draw_text("hello", vec2(0, 0), color(0, 0, 0, 255));
            draw.draw_text("x", vec2(0, 0), color(0, 0, 0, 255));
            draw.pop_clip_rect();
        }
        let kinds: Vec<&str> = fx
            .commands
            .as_slice()
            .iter()
            .map(|cmd| match cmd {
                Command::Clip { .. } => "clip",
                Command::Text { .. } => "text",
                _ => "other",
            })
            .collect();
        assert_eq!(kinds, vec!["clip", "text", "clip", "text"]);
    }

    #[test]
    #[should_panic(expected = "clip stack is empty")]
    fn popping_an_empty_clip_stack_is_fatal() {
        let mut fx = Fixture::new();
        let mut draw = fx.draw();
        draw.push_clip_rect(rect(0, 0, 10, 10));
        draw.pop_clip_rect();
        draw.pop_clip_rect();
    }

    #[test]
    #[should_panic(expected = "clip stack overflow")]
    fn clip_overflow_is_fatal() {
        let mut fx = Fixture::new();
        let mut draw = fx.draw();
        for _ in 0..5 {
            draw.push_clip_rect(rect(0, 0, 10, 10));
        }
    }
}
