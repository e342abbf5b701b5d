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
use crate::utils::rect_contains;
use std::cmp::max;

const MIN_WINDOW_WIDTH: i32 = 96;
const MIN_WINDOW_HEIGHT: i32 = 64;

impl<M: TextMetrics> Context<M> {
    fn begin_root_container(&mut self, slot: usize) {
        if self.root_list.len() >= self.limits.root_list {
            fatal(ContractViolation::StackOverflow { stack: "root", capacity: self.limits.root_list });
        }
        self.root_list.push(slot);
        let head = self.commands.push_jump();
        self.containers[slot].head = Some(head);

        let cnt = self.containers[slot];
        let above_next_root = match self.next_hover_root {
            Some(other) => cnt.zindex > self.containers[other].zindex,
            None => true,
        };
        if rect_contains(cnt.rect, self.input.mouse_pos) && above_next_root {
            self.next_hover_root = Some(slot);
        }

        // nested roots must not be clipped by their parent
        self.draw().push_raw_clip_rect(UNCLIPPED_RECT);
    }

    fn end_root_container(&mut self, slot: usize) {
        self.pop_clip_rect();
        let tail = self.commands.push_jump();
        self.containers[slot].tail = Some(tail);
        if let Some(head) = self.containers[slot].head {
            let len = self.commands.len();
            self.commands.set_jump(head, len);
        }
    }

    pub(crate) fn push_container_body(&mut self, slot: usize, body: Recti, opt: ContainerOption) {
        let body = if opt.has_no_scroll() { body } else { self.scrollbars(slot, body) };
        let scroll = self.containers[slot].scroll;
        self.layout.push(expand_rect(body, -self.style.padding), scroll);
        self.containers[slot].body = body;
    }

    // Title bar with drag-to-move and the close button. Returns the body below the bar.
    fn window_title(&mut self, slot: usize, title: &str, r: Recti, opt: ContainerOption) -> Recti {
        let chrome = opt.chrome_opt();
        let tr = rect(r.x, r.y, r.width, self.style.title_height);
        self.draw_frame(tr, ControlColor::TitleBG);

        let title_id = self.get_id("!title");
        self.update_control(title_id, tr, chrome);
        self.draw_control_text(title, tr, ControlColor::TitleText, WidgetOption::NONE);
        if self.focus == Some(title_id) && self.input.mouse_down.is_only_left() {
            let delta = self.input.mouse_delta;
            let cnt = &mut self.containers[slot];
            cnt.rect.x += delta.x;
            cnt.rect.y += delta.y;
        }

        if !opt.has_no_close() {
            let close_id = self.get_id("!close");
            let close = rect(tr.x + tr.width - tr.height, tr.y, tr.height, tr.height);
            let color = self.style.color(ControlColor::TitleText);
            self.draw_icon(IconId::Close, close, color);
            self.update_control(close_id, close, chrome);
            if self.input.mouse_pressed.is_only_left() && self.focus == Some(close_id) {
                self.containers[slot].open = false;
            }
        }

        rect(r.x, r.y + tr.height, r.width, r.height - tr.height)
    }

    fn window_resize(&mut self, slot: usize, r: Recti, opt: ContainerOption) {
        let sz = self.style.title_height;
        let id = self.get_id("!resize");
        let handle = rect(r.x + r.width - sz, r.y + r.height - sz, sz, sz);
        self.update_control(id, handle, opt.chrome_opt());
        if self.focus == Some(id) && self.input.mouse_down.is_only_left() {
            let delta = self.input.mouse_delta;
            let cnt = &mut self.containers[slot];
            cnt.rect.width = max(MIN_WINDOW_WIDTH, cnt.rect.width + delta.x);
            cnt.rect.height = max(MIN_WINDOW_HEIGHT, cnt.rect.height + delta.y);
        }
    }

    /// Declares a root window named `title`, placed at `r` the first time it is seen.
    ///
    /// Returns `false` without calling `f` when the window is closed. The window's commands are
    /// replayed in z-order regardless of where in the frame it is declared, including inside
    /// another window.
    pub fn window<F: FnOnce(&mut Self)>(&mut self, title: &str, r: Recti, opt: ContainerOption, f: F) -> bool {
        let id = self.get_id(title);
        let slot = match self.container_slot(id, opt) {
            Some(slot) if self.containers[slot].open => slot,
            _ => return false,
        };

        self.push_id_raw(id);
        if self.containers[slot].rect.width == 0 {
            self.containers[slot].rect = r;
        }
        self.push_container(slot);
        self.begin_root_container(slot);

        let r = self.containers[slot].rect;
        if !opt.has_no_frame() {
            self.draw_frame(r, ControlColor::WindowBG);
        }

        let body = if opt.has_no_title() { r } else { self.window_title(slot, title, r, opt) };
        self.push_container_body(slot, body, opt);

        if !opt.is_fixed() {
            self.window_resize(slot, r, opt);
        }

        if opt.is_auto_sizing() {
            let layout_body = self.layout.current_body();
            let cnt = &mut self.containers[slot];
            cnt.rect.width = cnt.content_size.x + (cnt.rect.width - layout_body.width);
            cnt.rect.height = cnt.content_size.y + (cnt.rect.height - layout_body.height);
        }

        if opt.is_popup() && !self.input.mouse_pressed.is_none() && self.hover_root != Some(slot) {
            self.containers[slot].open = false;
        }

        let body = self.containers[slot].body;
        self.with_clip(body, f);

        self.end_root_container(slot);
        self.pop_container();
        self.pop_id();
        true
    }

    /// Opens popup `name` at the pointer and makes it the front-most hover root.
    pub fn open_popup(&mut self, name: &str) {
        let id = self.get_id(name);
        let slot = self.ensure_container(id);
        self.next_hover_root = Some(slot);
        self.hover_root = Some(slot);

        let pos = self.input.mouse_pos;
        let cnt = &mut self.containers[slot];
        cnt.rect = rect(pos.x, pos.y, 1, 1);
        cnt.open = true;
        self.bring_to_front_slot(slot);
    }

    /// Declares popup `name`. It sizes itself to its content and closes on a press outside of it.
    pub fn popup<F: FnOnce(&mut Self)>(&mut self, name: &str, f: F) -> bool {
        let opt = ContainerOption::POPUP | ContainerOption::AUTO_SIZE | ContainerOption::NO_RESIZE | ContainerOption::NO_SCROLL | ContainerOption::NO_TITLE | ContainerOption::CLOSED;
        self.window(name, rect(0, 0, 0, 0), opt, f)
    }

    /// Declares a panel: a non-root container occupying the next layout cell with its own
    /// scrolling and clipping.
    pub fn panel<F: FnOnce(&mut Self)>(&mut self, name: &str, opt: ContainerOption, f: F) {
        let id = self.push_id(name);
        let slot = match self.container_slot(id, opt) {
            Some(slot) => slot,
            None => {
                self.pop_id();
                return;
            }
        };

        let r = self.layout_next();
        self.containers[slot].rect = r;
        if !opt.has_no_frame() {
            self.draw_frame(r, ControlColor::PanelBG);
        }

        self.push_container(slot);
        self.push_container_body(slot, r, opt);
        let body = self.containers[slot].body;
        self.with_clip(body, f);
        self.pop_container();
        self.pop_id();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> Context<FixedMetrics> { Context::new(FixedMetrics::default()) }

    fn tuple(r: Recti) -> (i32, i32, i32, i32) { (r.x, r.y, r.width, r.height) }

    #[test]
    fn first_cell_sits_below_the_title() {
        let mut ctx = ctx();
        let mut cell = rect(0, 0, 0, 0);
        for _ in 0..2 {
            ctx.frame(|ctx| {
                ctx.window("Demo", rect(0, 0, 300, 200), ContainerOption::NONE, |ctx| {
                    cell = ctx.layout_next();
                });
            });
        }
        assert_eq!(tuple(cell), (5, 29, 290, 20));
        let cnt = *ctx.container("Demo");
        assert_eq!(tuple(cnt.body), (0, 24, 300, 176));
        assert_eq!(cnt.content_size.y, 20);
    }

    #[test]
    fn first_frame_reserves_room_for_scrollbars() {
        let mut ctx = ctx();
        let mut cell = rect(0, 0, 0, 0);
        ctx.frame(|ctx| {
            ctx.window("Demo", rect(0, 0, 300, 200), ContainerOption::NONE, |ctx| {
                cell = ctx.layout_next();
            });
        });
        // no content size is known yet, so both bars are assumed
        assert_eq!(tuple(cell), (5, 29, 278, 20));
    }

    #[test]
    fn rect_is_only_used_for_placement() {
        let mut ctx = ctx();
        ctx.frame(|ctx| {
            ctx.window("w", rect(10, 10, 200, 100), ContainerOption::NONE, |_| {});
        });
        ctx.frame(|ctx| {
            ctx.window("w", rect(50, 50, 300, 300), ContainerOption::NONE, |_| {});
        });
        assert_eq!(tuple(ctx.container("w").rect), (10, 10, 200, 100));
    }

    fn drag(ctx: &mut Context<FixedMetrics>, from: Vec2i, to: Vec2i, body: impl Fn(&mut Context<FixedMetrics>)) {
        ctx.input_mut().mousemove(from.x, from.y);
        ctx.frame(&body);
        ctx.frame(&body);
        ctx.input_mut().mousedown(from.x, from.y, MouseButton::LEFT);
        ctx.frame(&body);
        ctx.input_mut().mousemove(to.x, to.y);
        ctx.frame(&body);
        ctx.input_mut().mouseup(to.x, to.y, MouseButton::LEFT);
        ctx.frame(&body);
    }

    #[test]
    fn dragging_the_title_moves_the_window() {
        let mut ctx = ctx();
        let body = |ctx: &mut Context<FixedMetrics>| {
            ctx.window("w", rect(0, 0, 200, 100), ContainerOption::NONE, |_| {});
        };
        drag(&mut ctx, vec2(50, 10), vec2(80, 30), body);
        assert_eq!(tuple(ctx.container("w").rect), (30, 20, 200, 100));
    }

    #[test]
    fn resize_handle_respects_minimum_size() {
        let mut ctx = ctx();
        let body = |ctx: &mut Context<FixedMetrics>| {
            ctx.window("w", rect(0, 0, 200, 100), ContainerOption::NONE, |_| {});
        };
        drag(&mut ctx, vec2(190, 90), vec2(230, 110), body);
        assert_eq!(tuple(ctx.container("w").rect), (0, 0, 240, 120));

        drag(&mut ctx, vec2(230, 110), vec2(0, 0), body);
        assert_eq!(tuple(ctx.container("w").rect), (0, 0, MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT));
    }

    #[test]
    fn close_button_closes_the_window() {
        let mut ctx = ctx();
        let mut shown = true;
        let mut body = |ctx: &mut Context<FixedMetrics>| {
            shown = ctx.window("w", rect(0, 0, 200, 100), ContainerOption::NONE, |_| {});
        };
        // close box is the last 24 px of the title bar
        ctx.input_mut().mousemove(190, 10);
        ctx.frame(&mut body);
        ctx.frame(&mut body);
        ctx.input_mut().mousedown(190, 10, MouseButton::LEFT);
        ctx.frame(&mut body);
        ctx.input_mut().mouseup(190, 10, MouseButton::LEFT);
        ctx.frame(&mut body);
        assert!(!shown);
        assert!(!ctx.container("w").open);
    }

    #[test]
    fn popup_opens_at_pointer_and_closes_on_outside_press() {
        let mut ctx = ctx();
        let body = |ctx: &mut Context<FixedMetrics>, open: bool| -> bool {
            let mut shown = false;
            ctx.window("main", rect(0, 0, 400, 400), ContainerOption::NO_TITLE, |ctx| {
                if open {
                    ctx.open_popup("menu");
                }
                shown = ctx.popup("menu", |ctx| {
                    ctx.layout_row(&[80], 0);
                    ctx.label("item");
                });
            });
            shown
        };
        // popups are named inside the scope of the window declaring them
        let menu_id = Id::from_str("main").derive(b"menu");
        let mut shown = false;

        ctx.input_mut().mousemove(100, 100);
        ctx.frame(|ctx| shown = body(ctx, true));
        assert!(shown);
        let menu = ctx.container_by_id(menu_id).map(|cnt| *cnt).unwrap();
        assert_eq!((menu.rect.x, menu.rect.y), (100, 100));
        assert!(menu.zindex > ctx.container("main").zindex);

        ctx.frame(|ctx| shown = body(ctx, false));
        assert!(shown);
        // auto-sized to the 80 x 20 cell plus padding
        let menu = ctx.container_by_id(menu_id).map(|cnt| *cnt).unwrap();
        assert_eq!(tuple(menu.rect), (100, 100, 90, 30));

        ctx.input_mut().mousemove(300, 300);
        ctx.frame(|ctx| shown = body(ctx, false));
        assert!(shown);
        ctx.input_mut().mousedown(300, 300, MouseButton::LEFT);
        ctx.frame(|ctx| shown = body(ctx, false));
        ctx.input_mut().mouseup(300, 300, MouseButton::LEFT);
        ctx.frame(|ctx| shown = body(ctx, false));
        assert!(!shown);
    }

    #[test]
    fn panel_lays_out_inside_its_cell() {
        let mut ctx = ctx();
        let mut inner = rect(0, 0, 0, 0);
        ctx.frame(|ctx| {
            ctx.window("w", rect(0, 0, 300, 300), ContainerOption::NO_TITLE, |ctx| {
                ctx.layout_row(&[100], 100);
                ctx.panel("side", ContainerOption::NO_SCROLL, |ctx| {
                    inner = ctx.layout_next();
                    assert!(!ctx.current_container().is_some_and(Container::is_root));
                });
            });
        });
        // window layout body starts at 5, the panel body is inset again by the padding
        assert_eq!(tuple(inner), (10, 10, 90, 20));
        assert!(ctx.check_stacks().is_ok());
    }
}
