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
use crate::*;

impl<M: TextMetrics> Context<M> {
    /// Draws word-wrapped text in a column of its own, one line per row.
    ///
    /// Lines break at spaces and at `\n`; a single word wider than the cell is never split.
    pub fn text(&mut self, text: &str) {
        let color = self.style.color(ControlColor::Text);
        let line_height = self.metrics.line_height();
        let bytes = text.as_bytes();
        let len = bytes.len();
        self.layout_column(|ctx| {
            ctx.layout_row(&[-1], line_height);
            let mut end = 0;
            let mut p = 0;
            while end < len {
                ctx.control(None, WidgetOption::NONE, |ctx, r| {
                    let start = p;
                    let mut w = 0;
                    end = p;
                    while end < len && bytes[end] != b'\n' {
                        let word = p;
                        while p < len && bytes[p] != b' ' && bytes[p] != b'\n' {
                            p += 1;
                        }
                        w += ctx.metrics.text_width(&text[word..p]);
                        if w > r.width && end != start {
                            break;
                        }
                        if p < len {
                            w += ctx.metrics.text_width(&text[p..p + 1]);
                        }
                        end = p;
                        p += 1;
                    }
                    ctx.draw_text(&text[start..end], vec2(r.x, r.y), color);
                    p = end + 1;
                    ResourceState::NONE
                });
            }
        });
    }

    /// Draws a single line of text in the next cell.
    pub fn label(&mut self, text: &str) {
        self.control(None, WidgetOption::NONE, |ctx, r| {
            ctx.draw_control_text(text, r, ControlColor::Text, WidgetOption::NONE);
            ResourceState::NONE
        });
    }

    /// Centered push button; returns [`ResourceState::SUBMIT`] on the frame it is clicked.
    pub fn button(&mut self, label: &str) -> ResourceState { self.button_ex(label, WidgetOption::ALIGN_CENTER) }

    /// Push button with explicit options. A button with an empty label is anonymous and never reacts.
    pub fn button_ex(&mut self, label: &str, opt: WidgetOption) -> ResourceState {
        let id = if label.is_empty() { None } else { Some(self.get_id(label)) };
        self.control(id, opt, |ctx, r| {
            let res = if ctx.clicked(id) { ResourceState::SUBMIT } else { ResourceState::NONE };
            ctx.draw_control_frame(id, r, ControlColor::Button, opt);
            if !label.is_empty() {
                ctx.draw_control_text(label, r, ControlColor::Text, opt);
            }
            res
        })
    }

    /// Check box bound to `state`, toggled by a click anywhere on the cell.
    pub fn checkbox(&mut self, label: &str, state: &mut bool) -> ResourceState {
        let id = self.get_id(label);
        self.control(Some(id), WidgetOption::NONE, |ctx, r| {
            let mut res = ResourceState::NONE;
            let check = rect(r.x, r.y, r.height, r.height);
            if ctx.clicked(Some(id)) {
                res |= ResourceState::CHANGE;
                *state = !*state;
            }

            ctx.draw_control_frame(Some(id), check, ControlColor::Base, WidgetOption::NONE);
            if *state {
                let color = ctx.style.color(ControlColor::Text);
                ctx.draw_icon(IconId::Check, check, color);
            }
            let r = rect(r.x + check.width, r.y, r.width - check.width, r.height);
            ctx.draw_control_text(label, r, ControlColor::Text, WidgetOption::NONE);
            res
        })
    }
}

#[cfg(test)]
mod tests {
    use super::super::harness::*;
    use super::*;

    #[test]
    fn text_wraps_at_word_boundaries() {
        let mut ctx = ctx();
        let body = |ctx: &mut Context<FixedMetrics>| {
            ctx.layout_row(&[60], 0);
            ctx.text("hello world foo");
        };
        frame(&mut ctx, body);
        frame(&mut ctx, body);
        assert_eq!(texts(&ctx), vec!["hello", "world", "foo"]);
        let ys: Vec<i32> = ctx
            .commands()
            .filter_map(|cmd| match cmd {
                Command::Text { pos, .. } => Some(pos.y),
                _ => None,
            })
            .collect();
        // line height 10 plus spacing 4
        assert_eq!(ys, vec![5, 19, 33]);
    }

    #[test]
    fn text_honors_newlines_and_overlong_words() {
        let mut ctx = ctx();
        let body = |ctx: &mut Context<FixedMetrics>| {
            ctx.layout_row(&[40], 0);
            ctx.text("a\nextraordinary b");
        };
        frame(&mut ctx, body);
        frame(&mut ctx, body);
        assert_eq!(texts(&ctx), vec!["a", "extraordinary", "b"]);
    }

    #[test]
    fn label_is_padded_and_vertically_centered() {
        let mut ctx = ctx();
        frame(&mut ctx, |ctx| ctx.label("hi"));
        frame(&mut ctx, |ctx| ctx.label("hi"));
        let pos: Vec<Vec2i> = ctx
            .commands()
            .filter_map(|cmd| match cmd {
                Command::Text { pos, .. } => Some(*pos),
                _ => None,
            })
            .collect();
        assert_eq!(pos.len(), 1);
        assert_eq!((pos[0].x, pos[0].y), (10, 10));
    }

    #[test]
    fn button_submits_on_click() {
        let mut ctx = ctx();
        let res = press_at(&mut ctx, vec2(50, 10), |ctx| ctx.button("OK"));
        assert!(res.is_submitted());
        assert_eq!(ctx.focus(), Some(Id::from_str("test").derive(b"OK")));

        ctx.input_mut().mouseup(50, 10, MouseButton::LEFT);
        let res = frame(&mut ctx, |ctx| ctx.button("OK"));
        assert!(res.is_none());
        assert_eq!(ctx.focus(), None);
    }

    #[test]
    fn unlabeled_button_is_inert() {
        let mut ctx = ctx();
        let res = press_at(&mut ctx, vec2(50, 10), |ctx| ctx.button(""));
        assert!(res.is_none());
        assert!(texts(&ctx).is_empty());
    }

    #[test]
    fn right_button_does_not_submit() {
        let mut ctx = ctx();
        hover_at(&mut ctx, vec2(50, 10), |ctx| ctx.button("OK"));
        ctx.input_mut().mousedown(50, 10, MouseButton::RIGHT);
        let res = frame(&mut ctx, |ctx| ctx.button("OK"));
        assert!(res.is_none());
    }

    #[test]
    fn checkbox_toggles_on_click() {
        let mut ctx = ctx();
        let mut state = false;
        let res = press_at(&mut ctx, vec2(50, 10), |ctx| ctx.checkbox("check", &mut state));
        assert!(res.is_changed());
        assert!(state);

        ctx.input_mut().mouseup(50, 10, MouseButton::LEFT);
        let res = frame(&mut ctx, |ctx| ctx.checkbox("check", &mut state));
        assert!(res.is_none());
        assert!(state);
        let icons = ctx.commands().filter(|cmd| matches!(cmd, Command::Icon { id: IconId::Check, .. })).count();
        assert_eq!(icons, 1);
    }
}
