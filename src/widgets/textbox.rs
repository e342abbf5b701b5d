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
    /// Single-line text field editing `buf`, identified by `id`.
    ///
    /// While focused it appends the frame's text input, deletes the last character on backspace
    /// and gives up focus on return, reporting [`ResourceState::SUBMIT`].
    pub fn textbox_raw(&mut self, buf: &mut String, id: Id, opt: WidgetOption) -> ResourceState {
        self.control(Some(id), opt | WidgetOption::HOLD_FOCUS, |ctx, r| {
            let mut res = ResourceState::NONE;
            let focused = ctx.focus == Some(id);

            if focused {
                if !ctx.input.input_text.is_empty() {
                    buf.push_str(&ctx.input.input_text);
                    res |= ResourceState::CHANGE;
                }
                if ctx.input.key_pressed.is_backspace() && buf.pop().is_some() {
                    res |= ResourceState::CHANGE;
                }
                if ctx.input.key_pressed.is_return() {
                    ctx.set_focus(None);
                    res |= ResourceState::SUBMIT;
                }
            }

            ctx.draw_control_frame(Some(id), r, ControlColor::Base, opt);
            if focused {
                let color = ctx.style.color(ControlColor::Text);
                let text_width = ctx.metrics.text_width(buf);
                let text_height = ctx.metrics.line_height();
                let padding = ctx.style.padding;
                // keep the caret visible by scrolling long text to the left
                let ofx = r.width - padding - text_width - 1;
                let text_x = r.x + ofx.min(padding);
                let text_y = r.y + (r.height - text_height) / 2;
                ctx.with_clip(r, |ctx| {
                    ctx.draw_text(buf, vec2(text_x, text_y), color);
                    ctx.draw_rect(rect(text_x + text_width, text_y, 1, text_height), color);
                });
            } else {
                ctx.draw_control_text(buf, r, ControlColor::Text, opt);
            }
            res
        })
    }

    /// Text field keyed by `key` in the current id scope.
    pub fn textbox(&mut self, key: &str, buf: &mut String) -> ResourceState { self.textbox_ex(key, buf, WidgetOption::NONE) }

    /// Text field keyed by `key`, with explicit options.
    pub fn textbox_ex(&mut self, key: &str, buf: &mut String, opt: WidgetOption) -> ResourceState {
        let id = self.get_id(key);
        self.textbox_raw(buf, id, opt)
    }

    /// Shift-click editing shared by sliders and number fields.
    ///
    /// Returns `true` while `id` is being edited as text, in which case the caller skips its
    /// normal behaviour. On submit or focus loss the text is parsed into `value`; text that is
    /// not a number yields `0`.
    pub(crate) fn number_textbox(&mut self, value: &mut Real, id: Id, precision: usize) -> bool {
        if self.input.mouse_pressed.is_only_left() && self.input.key_down.is_shift() && self.hover == Some(id) {
            self.number_edit = Some(id);
            self.number_edit_buf = format!("{:.*}", precision, *value);
        }
        if self.number_edit != Some(id) {
            return false;
        }

        let mut buf = std::mem::take(&mut self.number_edit_buf);
        let res = self.textbox_raw(&mut buf, id, WidgetOption::NONE);
        if res.is_submitted() || self.focus != Some(id) {
            *value = match buf.trim().parse::<Real>() {
                Ok(v) => v,
                Err(err) => {
                    log::warn!("number field {:?}: cannot parse {:?} ({}), using 0", id, buf, err);
                    0.0
                }
            };
            self.number_edit = None;
            buf.clear();
        }
        self.number_edit_buf = buf;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::super::harness::*;
    use super::*;

    fn focused_textbox(ctx: &mut Context<FixedMetrics>, buf: &mut String) {
        press_at(ctx, vec2(50, 10), |ctx| ctx.textbox("name", buf));
        ctx.input_mut().mouseup(50, 10, MouseButton::LEFT);
        frame(ctx, |ctx| ctx.textbox("name", buf));
    }

    #[test]
    fn typing_appends_and_backspace_deletes() {
        let mut ctx = ctx();
        let mut buf = String::from("ab");
        focused_textbox(&mut ctx, &mut buf);
        assert_eq!(ctx.focus(), Some(Id::from_str("test").derive(b"name")));

        ctx.input_mut().text("cé");
        let res = frame(&mut ctx, |ctx| ctx.textbox("name", &mut buf));
        assert!(res.is_changed());
        assert_eq!(buf, "abcé");

        ctx.input_mut().keydown(KeyMode::BACKSPACE);
        let res = frame(&mut ctx, |ctx| ctx.textbox("name", &mut buf));
        ctx.input_mut().keyup(KeyMode::BACKSPACE);
        assert!(res.is_changed());
        assert_eq!(buf, "abc");

        let res = frame(&mut ctx, |ctx| ctx.textbox("name", &mut buf));
        assert!(res.is_none());
    }

    #[test]
    fn return_submits_and_releases_focus() {
        let mut ctx = ctx();
        let mut buf = String::new();
        focused_textbox(&mut ctx, &mut buf);

        ctx.input_mut().keydown(KeyMode::RETURN);
        let res = frame(&mut ctx, |ctx| ctx.textbox("name", &mut buf));
        assert!(res.is_submitted());
        assert_eq!(ctx.focus(), None);

        ctx.input_mut().text("x");
        frame(&mut ctx, |ctx| ctx.textbox("name", &mut buf));
        assert!(buf.is_empty());
    }

    #[test]
    fn backspace_on_empty_buffer_changes_nothing() {
        let mut ctx = ctx();
        let mut buf = String::new();
        focused_textbox(&mut ctx, &mut buf);
        ctx.input_mut().keydown(KeyMode::BACKSPACE);
        let res = frame(&mut ctx, |ctx| ctx.textbox("name", &mut buf));
        assert!(res.is_none());
    }

    #[test]
    fn focused_text_is_drawn_with_a_caret() {
        let mut ctx = ctx();
        let mut buf = String::from("abc");
        focused_textbox(&mut ctx, &mut buf);
        // text starts at the padding, the caret follows its 24 px
        let caret = ctx.commands().any(|cmd| match cmd {
            Command::Rect { rect, .. } => (rect.x, rect.y, rect.width, rect.height) == (34, 10, 1, 10),
            _ => false,
        });
        assert!(caret);
        assert_eq!(texts(&ctx), vec!["abc"]);
    }

    #[test]
    fn textbox_keeps_focus_after_release() {
        let mut ctx = ctx();
        let mut buf = String::new();
        focused_textbox(&mut ctx, &mut buf);
        frame(&mut ctx, |ctx| ctx.textbox("name", &mut buf));
        assert!(ctx.focus().is_some());
    }
}
