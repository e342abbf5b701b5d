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
use std::ops::{Deref, DerefMut};

use crate::draw_context::{clip_kind, DrawCtx};
use crate::error::{fatal, ContractViolation};
use crate::idmngr::IdManager;
use crate::layout::LayoutManager;
use crate::utils::rect_contains;
use crate::*;

/// Primary entry point: owns every piece of per-frame and persistent UI state.
///
/// A frame is `begin`, any number of widget and container calls, then `end`. After `end`,
/// [`Context::commands`] replays the recorded draw commands in z-order.
pub struct Context<M: TextMetrics> {
    pub(crate) metrics: M,
    pub(crate) style: Style,
    pub(crate) limits: Limits,
    pub(crate) input: Input,

    pub(crate) commands: CommandList,
    pub(crate) clip_stack: Vec<Recti>,
    pub(crate) ids: IdManager,
    pub(crate) layout: LayoutManager,
    pub(crate) container_stack: Vec<usize>,
    pub(crate) root_list: Vec<usize>,

    pub(crate) containers: Vec<Container>,
    pub(crate) container_pool: Pool,
    pub(crate) treenode_pool: Pool,

    pub(crate) hover: Option<Id>,
    pub(crate) focus: Option<Id>,
    pub(crate) keep_focus: bool,
    pub(crate) hover_root: Option<usize>,
    pub(crate) next_hover_root: Option<usize>,
    pub(crate) scroll_target: Option<usize>,
    pub(crate) last_zindex: i32,
    pub(crate) frame: u64,

    pub(crate) number_edit: Option<Id>,
    pub(crate) number_edit_buf: String,
}

impl<M: TextMetrics> Context<M> {
    /// Creates a context with the default style and limits.
    pub fn new(metrics: M) -> Self { Self::with_limits(metrics, Limits::default()) }

    /// Creates a context with custom buffer and pool capacities.
    pub fn with_limits(metrics: M, limits: Limits) -> Self {
        Self {
            metrics,
            style: Style::default(),
            limits,
            input: Input::default(),

            commands: CommandList::new(limits.command_list),
            clip_stack: Vec::with_capacity(limits.clip_stack),
            ids: IdManager::default(),
            layout: LayoutManager::new(limits.layout_stack),
            container_stack: Vec::with_capacity(limits.container_stack),
            root_list: Vec::with_capacity(limits.root_list),

            containers: vec![Container::default(); limits.container_pool],
            container_pool: Pool::new(limits.container_pool),
            treenode_pool: Pool::new(limits.treenode_pool),

            hover: None,
            focus: None,
            keep_focus: false,
            hover_root: None,
            next_hover_root: None,
            scroll_target: None,
            last_zindex: 0,
            frame: 0,

            number_edit: None,
            number_edit_buf: String::new(),
        }
    }

    /// Returns the current style.
    pub fn style(&self) -> &Style { &self.style }

    /// Replaces the current style. Takes effect for cells laid out after the next `begin`.
    pub fn set_style(&mut self, style: Style) { self.style = style; }

    /// Returns the configured capacities.
    pub fn limits(&self) -> &Limits { &self.limits }

    /// Returns the host supplied text metrics.
    pub fn metrics(&self) -> &M { &self.metrics }

    /// Input accumulated for the current frame.
    pub fn input(&self) -> &Input { &self.input }

    /// Mutable input, fed by the host between frames.
    pub fn input_mut(&mut self) -> &mut Input { &mut self.input }

    /// Number of frames started so far.
    pub fn frame_count(&self) -> u64 { self.frame }

    /// Starts a frame: computes the pointer delta and resets the per-frame buffers.
    pub fn begin(&mut self) {
        self.input.prelude();
        self.commands.clear();
        self.root_list.clear();
        self.scroll_target = None;
        self.hover_root = self.next_hover_root;
        self.next_hover_root = None;
        self.frame += 1;

        let default_height = self.metrics.line_height() + self.style.padding * 2;
        self.layout.set_metrics(self.style.spacing, default_height);
    }

    /// Ends a frame: validates the stacks, dispatches scrolling, updates focus and z-order,
    /// resets edge-triggered input and patches the root containers' jumps.
    pub fn end(&mut self) {
        if let Err(violation) = self.check_stacks() {
            fatal(violation);
        }

        if let Some(slot) = self.scroll_target {
            let delta = self.input.scroll_delta;
            let cnt = &mut self.containers[slot];
            cnt.scroll.x += delta.x;
            cnt.scroll.y += delta.y;
        }

        if !self.keep_focus {
            if self.focus.is_some() {
                log::trace!("focus dropped: {:?} was not updated this frame", self.focus);
            }
            self.focus = None;
        }
        self.keep_focus = false;

        if !self.input.mouse_pressed.is_none() {
            if let Some(slot) = self.next_hover_root {
                let zindex = self.containers[slot].zindex;
                if zindex < self.last_zindex && zindex >= 0 {
                    self.bring_to_front_slot(slot);
                }
            }
        }

        self.input.epilogue();

        let containers = &self.containers;
        self.root_list.sort_by_key(|slot| containers[*slot].zindex);

        self.patch_root_jumps();
    }

    fn patch_root_jumps(&mut self) {
        let mut prev_tail: Option<usize> = None;
        for i in 0..self.root_list.len() {
            let cnt = self.containers[self.root_list[i]];
            let (Some(head), Some(tail)) = (cnt.head, cnt.tail) else { continue };
            match prev_tail {
                None => {
                    if !self.commands.get(0).is_some_and(Command::is_jump) {
                        fatal(ContractViolation::MissingLeadingJump);
                    }
                    self.commands.set_jump(0, head + 1);
                }
                Some(prev) => self.commands.set_jump(prev, head + 1),
            }
            prev_tail = Some(tail);
        }
        if let Some(last) = prev_tail {
            let len = self.commands.len();
            self.commands.set_jump(last, len);
        }
    }

    /// Runs `begin`, the declarations in `f`, then `end`.
    pub fn frame<F: FnOnce(&mut Self)>(&mut self, f: F) {
        self.begin();
        f(self);
        self.end();
    }

    /// Reports the first scoped stack that is not empty.
    pub fn check_stacks(&self) -> Result<(), ContractViolation> {
        let stacks = [
            ("container", self.container_stack.len()),
            ("clip", self.clip_stack.len()),
            ("id", self.ids.depth()),
            ("layout", self.layout.depth()),
        ];
        match stacks.into_iter().find(|(_, depth)| *depth != 0) {
            Some((stack, depth)) => Err(ContractViolation::UnbalancedStack { stack, depth }),
            None => Ok(()),
        }
    }

    /// Draw commands in z-order, following the patched jumps.
    pub fn commands(&self) -> CommandIter<'_> { self.commands.iter() }

    /// The raw command buffer in call order.
    pub fn command_list(&self) -> &CommandList { &self.commands }

    ////////////////////////////////////////////////////////////////////////////
    // identity
    ////////////////////////////////////////////////////////////////////////////

    /// Computes the id of `key` in the current scope.
    pub fn get_id<K: IdSource + ?Sized>(&mut self, key: &K) -> Id { self.ids.get_id(&key.id_bytes()) }

    /// Computes the id of `key` and makes it the current scope.
    pub fn push_id<K: IdSource + ?Sized>(&mut self, key: &K) -> Id {
        let id = self.get_id(key);
        self.push_id_raw(id);
        id
    }

    /// Makes `id` the current scope.
    pub fn push_id_raw(&mut self, id: Id) {
        if self.ids.depth() >= self.limits.id_stack {
            fatal(ContractViolation::StackOverflow { stack: "id", capacity: self.limits.id_stack });
        }
        self.ids.push(id);
    }

    /// Restores the previous scope.
    pub fn pop_id(&mut self) {
        if self.ids.pop().is_none() {
            fatal(ContractViolation::EmptyStack { stack: "id" });
        }
    }

    /// The most recently computed id.
    pub fn last_id(&self) -> Option<Id> { self.ids.last_id() }

    /// Runs `f` with `key` pushed as the id scope.
    pub fn with_id<K: IdSource + ?Sized, R, F: FnOnce(&mut Self) -> R>(&mut self, key: &K, f: F) -> R {
        let mut scope = self.id_scope(key);
        f(&mut scope)
    }

    /// Pushes `key` as the id scope until the returned guard is dropped.
    pub fn id_scope<K: IdSource + ?Sized>(&mut self, key: &K) -> Scope<'_, M> {
        self.push_id(key);
        Scope { ctx: self, kind: ScopeKind::Id }
    }

    ////////////////////////////////////////////////////////////////////////////
    // clipping
    ////////////////////////////////////////////////////////////////////////////

    pub(crate) fn draw(&mut self) -> DrawCtx<'_, M> {
        DrawCtx::new(&mut self.commands, &mut self.clip_stack, self.limits.clip_stack, &self.style, &self.metrics)
    }

    /// Pushes the intersection of `rect` and the current clip rectangle.
    pub fn push_clip_rect(&mut self, rect: Recti) { self.draw().push_clip_rect(rect); }

    /// Restores the previous clip rectangle.
    pub fn pop_clip_rect(&mut self) { self.draw().pop_clip_rect(); }

    /// The effective clip rectangle.
    pub fn clip_rect(&self) -> Recti { self.clip_stack.last().copied().unwrap_or(UNCLIPPED_RECT) }

    /// Classifies `rect` against the effective clip rectangle.
    pub fn check_clip(&self, rect: Recti) -> Clip { clip_kind(rect, self.clip_rect()) }

    /// Runs `f` with `rect` pushed on the clip stack.
    pub fn with_clip<R, F: FnOnce(&mut Self) -> R>(&mut self, rect: Recti, f: F) -> R {
        let mut scope = self.clip_scope(rect);
        f(&mut scope)
    }

    /// Pushes `rect` on the clip stack until the returned guard is dropped.
    pub fn clip_scope(&mut self, rect: Recti) -> Scope<'_, M> {
        self.push_clip_rect(rect);
        Scope { ctx: self, kind: ScopeKind::Clip }
    }

    ////////////////////////////////////////////////////////////////////////////
    // drawing
    ////////////////////////////////////////////////////////////////////////////

    /// Emits a filled rectangle, clipped to the current clip rectangle.
    pub fn draw_rect(&mut self, rect: Recti, color: Color) { self.draw().draw_rect(rect, color); }

    /// Emits a one pixel outline.
    pub fn draw_box(&mut self, rect: Recti, color: Color) { self.draw().draw_box(rect, color); }

    /// Emits text at `pos`, bracketed by clip commands when partly visible.
    pub fn draw_text(&mut self, text: &str, pos: Vec2i, color: Color) { self.draw().draw_text(text, pos, color); }

    /// Emits an icon, bracketed by clip commands when partly visible.
    pub fn draw_icon(&mut self, id: IconId, rect: Recti, color: Color) { self.draw().draw_icon(id, rect, color); }

    /// Draws a frame with the palette entry `colorid` and, for most colors, a border.
    pub fn draw_frame(&mut self, rect: Recti, colorid: ControlColor) { self.draw().draw_frame(rect, colorid); }

    /// Draws the frame of control `id`, promoted to its hover or focus color. Anonymous controls are never promoted.
    pub fn draw_control_frame(&mut self, id: Option<Id>, rect: Recti, colorid: ControlColor, opt: WidgetOption) {
        let focused = id.is_some() && self.focus == id;
        let hovered = id.is_some() && self.hover == id;
        self.draw().draw_control_frame(focused, hovered, rect, colorid, opt);
    }

    /// Draws a single line of text inside `rect`, aligned according to `opt`.
    pub fn draw_control_text(&mut self, text: &str, rect: Recti, colorid: ControlColor, opt: WidgetOption) {
        self.draw().draw_control_text(text, rect, colorid, opt);
    }

    ////////////////////////////////////////////////////////////////////////////
    // layout
    ////////////////////////////////////////////////////////////////////////////

    /// Sets the row template. Non-positive widths stretch; a non-positive height uses the default control height.
    pub fn layout_row(&mut self, widths: &[i32], height: i32) { self.layout.row(widths, height); }

    /// Width of cells laid out while the row template is empty; non-positive fills the row.
    pub fn layout_width(&mut self, width: i32) { self.layout.set_width(width); }

    /// Height of the current row.
    pub fn layout_height(&mut self, height: i32) { self.layout.set_height(height); }

    /// Overrides the next cell with `rect`, in screen coordinates or relative to the layout body.
    pub fn layout_set_next(&mut self, rect: Recti, relative: bool) { self.layout.set_next(rect, relative); }

    /// Returns the rectangle of the next cell and advances the cursor.
    pub fn layout_next(&mut self) -> Recti { self.layout.next() }

    /// The rectangle returned by the last `layout_next`.
    pub fn last_rect(&self) -> Recti { self.layout.last_rect() }

    /// Starts a nested layout occupying the next cell.
    pub fn layout_begin_column(&mut self) { self.layout.begin_column(); }

    /// Ends the nested layout and advances the parent past it.
    pub fn layout_end_column(&mut self) { self.layout.end_column(); }

    /// Runs `f` inside a nested column.
    pub fn layout_column<R, F: FnOnce(&mut Self) -> R>(&mut self, f: F) -> R {
        let mut scope = self.column_scope();
        f(&mut scope)
    }

    /// Starts a nested column that ends when the returned guard is dropped.
    pub fn column_scope(&mut self) -> Scope<'_, M> {
        self.layout_begin_column();
        Scope { ctx: self, kind: ScopeKind::Column }
    }

    ////////////////////////////////////////////////////////////////////////////
    // containers
    ////////////////////////////////////////////////////////////////////////////

    /// Returns the slot of container `id`, creating it unless `opt` has [`ContainerOption::CLOSED`].
    pub(crate) fn container_slot(&mut self, id: Id, opt: ContainerOption) -> Option<usize> {
        if let Some(slot) = self.container_pool.get(id) {
            if self.containers[slot].open || !opt.is_closed() {
                self.container_pool.touch(slot);
            }
            return Some(slot);
        }
        if opt.is_closed() {
            return None;
        }
        Some(self.init_container(id))
    }

    pub(crate) fn ensure_container(&mut self, id: Id) -> usize {
        match self.container_pool.get(id) {
            Some(slot) => {
                self.container_pool.touch(slot);
                slot
            }
            None => self.init_container(id),
        }
    }

    fn init_container(&mut self, id: Id) -> usize {
        let slot = self.container_pool.init(id);
        self.containers[slot] = Container::new(id);
        self.bring_to_front_slot(slot);
        log::debug!("container {:?} created in slot {}", id, slot);
        slot
    }

    /// Returns the container named `name` in the current scope, creating it if needed.
    pub fn container(&mut self, name: &str) -> &mut Container {
        let id = self.get_id(name);
        let slot = self.ensure_container(id);
        &mut self.containers[slot]
    }

    /// Returns the live container with identity `id`.
    pub fn container_by_id(&mut self, id: Id) -> Option<&mut Container> {
        let slot = self.container_pool.get(id)?;
        Some(&mut self.containers[slot])
    }

    /// The innermost container being declared.
    pub fn current_container(&self) -> Option<&Container> { self.container_stack.last().map(|slot| &self.containers[*slot]) }

    /// Mutable access to the innermost container being declared.
    pub fn current_container_mut(&mut self) -> Option<&mut Container> {
        let slot = *self.container_stack.last()?;
        Some(&mut self.containers[slot])
    }

    /// Gives container `id` the highest z-index.
    pub fn bring_to_front(&mut self, id: Id) {
        if let Some(slot) = self.container_pool.get(id) {
            self.bring_to_front_slot(slot);
        }
    }

    pub(crate) fn bring_to_front_slot(&mut self, slot: usize) {
        self.last_zindex += 1;
        self.containers[slot].zindex = self.last_zindex;
        log::trace!("container {:?} brought to front (z {})", self.containers[slot].id, self.last_zindex);
    }

    pub(crate) fn push_container(&mut self, slot: usize) {
        if self.container_stack.len() >= self.limits.container_stack {
            fatal(ContractViolation::StackOverflow { stack: "container", capacity: self.limits.container_stack });
        }
        self.container_stack.push(slot);
    }

    /// Pops the innermost container together with its layout, recording its content size.
    pub(crate) fn pop_container(&mut self) {
        let (body, max) = match self.layout.pop() {
            Some(layout) => layout,
            None => fatal(ContractViolation::EmptyStack { stack: "layout" }),
        };
        let slot = match self.container_stack.pop() {
            Some(slot) => slot,
            None => fatal(ContractViolation::EmptyStack { stack: "container" }),
        };
        self.containers[slot].content_size = match max {
            Some(m) => vec2(m.x - body.x, m.y - body.y),
            None => vec2(0, 0),
        };
    }

    ////////////////////////////////////////////////////////////////////////////
    // interaction
    ////////////////////////////////////////////////////////////////////////////

    /// The hovered control.
    pub fn hover(&self) -> Option<Id> { self.hover }

    /// The focused control.
    pub fn focus(&self) -> Option<Id> { self.focus }

    /// Focuses `id` (or clears focus) and keeps it for the current frame.
    pub fn set_focus(&mut self, id: Option<Id>) {
        if self.focus != id {
            log::trace!("focus {:?} -> {:?}", self.focus, id);
        }
        self.focus = id;
        self.keep_focus = true;
    }

    // Walks the container stack up to the current root.
    pub(crate) fn in_hover_root(&self) -> bool {
        for slot in self.container_stack.iter().rev() {
            if Some(*slot) == self.hover_root {
                return true;
            }
            if self.containers[*slot].is_root() {
                break;
            }
        }
        false
    }

    /// Returns `true` if the pointer is over `rect`, inside the clip rectangle and in the hover root.
    pub fn mouse_over(&self, rect: Recti) -> bool {
        let pos = self.input.mouse_pos;
        rect_contains(rect, pos) && rect_contains(self.clip_rect(), pos) && self.in_hover_root()
    }

    /// Updates hover and focus for control `id` occupying `rect`.
    pub fn update_control(&mut self, id: Id, rect: Recti, opt: WidgetOption) {
        let mouseover = self.mouse_over(rect);

        if self.focus == Some(id) {
            self.keep_focus = true;
        }
        if opt.is_not_interactive() {
            return;
        }
        if mouseover && self.input.mouse_down.is_none() {
            self.hover = Some(id);
        }

        if self.focus == Some(id) {
            if !self.input.mouse_pressed.is_none() && !mouseover {
                self.set_focus(None);
            }
            if self.input.mouse_down.is_none() && !opt.is_holding_focus() {
                self.set_focus(None);
            }
        }

        if self.hover == Some(id) {
            if !self.input.mouse_pressed.is_none() {
                self.set_focus(Some(id));
            } else if !mouseover {
                self.hover = None;
            }
        }
    }
}

#[derive(Copy, Clone)]
enum ScopeKind {
    Id,
    Clip,
    Column,
}

/// Guard returned by [`Context::id_scope`], [`Context::clip_scope`] and [`Context::column_scope`].
///
/// Dereferences to the context and pops the pushed entry when dropped.
pub struct Scope<'a, M: TextMetrics> {
    ctx: &'a mut Context<M>,
    kind: ScopeKind,
}

impl<M: TextMetrics> Deref for Scope<'_, M> {
    type Target = Context<M>;
    fn deref(&self) -> &Self::Target { self.ctx }
}

impl<M: TextMetrics> DerefMut for Scope<'_, M> {
    fn deref_mut(&mut self) -> &mut Self::Target { self.ctx }
}

impl<M: TextMetrics> Drop for Scope<'_, M> {
    fn drop(&mut self) {
        match self.kind {
            ScopeKind::Id => self.ctx.pop_id(),
            ScopeKind::Clip => self.ctx.pop_clip_rect(),
            ScopeKind::Column => self.ctx.layout_end_column(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> Context<FixedMetrics> { Context::new(FixedMetrics::default()) }

    fn window_order(ctx: &Context<FixedMetrics>) -> Vec<i32> {
        // every test window draws its background with a distinct x
        ctx.commands()
            .filter_map(|cmd| match cmd {
                Command::Rect { rect, .. } if rect.width > 2 && rect.height > 2 => Some(rect.x),
                _ => None,
            })
            .collect()
    }

    fn two_windows(ctx: &mut Context<FixedMetrics>) {
        ctx.frame(|ctx| {
            ctx.window("A", rect(0, 0, 100, 100), ContainerOption::NO_TITLE, |_| {});
            ctx.window("B", rect(200, 0, 100, 100), ContainerOption::NO_TITLE, |_| {});
        });
    }

    #[test]
    fn empty_frame_produces_no_commands() {
        let mut ctx = ctx();
        ctx.frame(|_| {});
        assert!(ctx.command_list().is_empty());
        assert_eq!(ctx.commands().count(), 0);
        assert_eq!(ctx.frame_count(), 1);
    }

    #[test]
    fn press_inside_lower_window_raises_it() {
        let mut ctx = ctx();
        two_windows(&mut ctx);
        let a = ctx.container("A").zindex;
        let b = ctx.container("B").zindex;
        assert!(b > a);
        assert_eq!(window_order(&ctx), vec![0, 200]);

        ctx.input_mut().mousemove(50, 50);
        two_windows(&mut ctx);
        ctx.input_mut().mousedown(50, 50, MouseButton::LEFT);
        two_windows(&mut ctx);

        let a = ctx.container("A").zindex;
        let b = ctx.container("B").zindex;
        assert!(a > b);
        two_windows(&mut ctx);
        assert_eq!(window_order(&ctx), vec![200, 0]);
    }

    #[test]
    fn replay_visits_each_root_once_in_z_order() {
        let mut ctx = ctx();
        let names = ["w0", "w1", "w2", "w3"];
        ctx.frame(|ctx| {
            for (i, name) in names.iter().enumerate() {
                ctx.window(name, rect(i as i32 * 110, 0, 100, 100), ContainerOption::NO_TITLE, |_| {});
            }
        });
        ctx.bring_to_front(Id::from_str("w1"));
        ctx.bring_to_front(Id::from_str("w0"));
        ctx.frame(|ctx| {
            for (i, name) in names.iter().enumerate() {
                ctx.window(name, rect(i as i32 * 110, 0, 100, 100), ContainerOption::NO_TITLE, |ctx| {
                    ctx.label(name);
                });
            }
        });

        let order = window_order(&ctx);
        assert_eq!(order, vec![220, 330, 110, 0]);
        let mut zs: Vec<i32> = order.iter().map(|x| ctx.container(names[(*x / 110) as usize]).zindex).collect();
        let sorted = {
            let mut s = zs.clone();
            s.sort();
            s
        };
        assert_eq!(zs, sorted);
        zs.dedup();
        assert_eq!(zs.len(), names.len());

        let labels: Vec<&str> = ctx
            .commands()
            .filter_map(|cmd| match cmd {
                Command::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(labels, vec!["w2", "w3", "w1", "w0"]);
    }

    #[test]
    fn nested_root_window_is_not_replayed_inside_its_parent() {
        let mut ctx = ctx();
        ctx.frame(|ctx| {
            ctx.window("outer", rect(0, 0, 100, 100), ContainerOption::NO_TITLE, |ctx| {
                ctx.label("before");
                ctx.window("inner", rect(300, 300, 100, 100), ContainerOption::NO_TITLE, |ctx| ctx.label("inner"));
                ctx.label("after");
            });
        });
        let labels: Vec<&str> = ctx
            .commands()
            .filter_map(|cmd| match cmd {
                Command::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect();
        // inner was created last and sits on top
        assert_eq!(labels, vec!["before", "after", "inner"]);
    }

    #[test]
    fn balanced_declarations_leave_stacks_empty() {
        let mut ctx = ctx();
        ctx.begin();
        ctx.window("w", rect(0, 0, 200, 200), ContainerOption::NONE, |ctx| {
            ctx.with_id("group", |ctx| {
                let _clip = ctx.clip_scope(rect(0, 0, 10, 10));
            });
            ctx.layout_column(|ctx| ctx.label("x"));
            let mut col = ctx.column_scope();
            col.label("y");
        });
        assert!(ctx.check_stacks().is_ok());
        ctx.end();
    }

    #[test]
    fn check_stacks_reports_leftovers() {
        let mut ctx = ctx();
        ctx.begin();
        ctx.push_id("leak");
        assert_eq!(ctx.check_stacks(), Err(ContractViolation::UnbalancedStack { stack: "id", depth: 1 }));
        ctx.pop_id();
        assert!(ctx.check_stacks().is_ok());
        ctx.end();
    }

    #[test]
    #[should_panic(expected = "unbalanced clip stack")]
    fn unbalanced_frame_is_fatal() {
        let mut ctx = ctx();
        ctx.begin();
        ctx.push_clip_rect(rect(0, 0, 10, 10));
        ctx.end();
    }

    #[test]
    #[should_panic(expected = "id stack is empty")]
    fn popping_past_the_window_scope_is_fatal() {
        let mut ctx = ctx();
        ctx.begin();
        // the window pops its own scope after the body already did
        ctx.window("w", rect(0, 0, 100, 100), ContainerOption::NO_TITLE, |ctx| ctx.pop_id());
    }

    #[test]
    #[should_panic(expected = "clip stack is empty")]
    fn popping_an_empty_clip_stack_is_fatal() {
        let mut ctx = ctx();
        ctx.begin();
        ctx.pop_clip_rect();
    }

    #[test]
    #[should_panic(expected = "id stack overflow")]
    fn id_overflow_is_fatal() {
        let mut ctx = ctx();
        ctx.begin();
        for i in 0..33 {
            ctx.push_id(&i);
        }
    }

    #[test]
    #[should_panic(expected = "layout stack is empty")]
    fn widget_outside_a_container_is_fatal() {
        let mut ctx = ctx();
        ctx.frame(|ctx| ctx.label("orphan"));
    }

    #[test]
    fn focus_sticks_while_reasserted() {
        let mut ctx = ctx();
        let body = |ctx: &mut Context<FixedMetrics>| {
            ctx.window("w", rect(0, 0, 200, 200), ContainerOption::NO_TITLE, |ctx| {
                ctx.textbox("field", &mut String::new());
            });
        };
        // the first cell is (5, 5, 190, 20)
        ctx.input_mut().mousemove(20, 10);
        ctx.frame(body);
        ctx.frame(body);
        ctx.input_mut().mousedown(20, 10, MouseButton::LEFT);
        ctx.frame(body);
        ctx.input_mut().mouseup(20, 10, MouseButton::LEFT);
        let field = ctx.last_id();
        assert!(field.is_some());
        assert_eq!(ctx.focus(), field);

        ctx.frame(body);
        ctx.frame(body);
        assert_eq!(ctx.focus(), field);

        // not declared: focus is dropped at the end of the frame
        ctx.frame(|ctx| {
            ctx.window("w", rect(0, 0, 200, 200), ContainerOption::NO_TITLE, |_| {});
        });
        assert_eq!(ctx.focus(), None);
    }

    #[test]
    fn press_outside_clears_focus() {
        let mut ctx = ctx();
        let body = |ctx: &mut Context<FixedMetrics>| {
            ctx.window("w", rect(0, 0, 200, 200), ContainerOption::NO_TITLE, |ctx| {
                ctx.textbox("field", &mut String::new());
            });
        };
        ctx.input_mut().mousemove(20, 10);
        ctx.frame(body);
        ctx.frame(body);
        ctx.input_mut().mousedown(20, 10, MouseButton::LEFT);
        ctx.frame(body);
        ctx.input_mut().mouseup(20, 10, MouseButton::LEFT);
        assert!(ctx.focus().is_some());

        // moving away releases hover but not focus
        ctx.input_mut().mousemove(100, 150);
        ctx.frame(body);
        assert!(ctx.focus().is_some());
        assert_eq!(ctx.hover(), None);

        ctx.input_mut().mousedown(100, 150, MouseButton::LEFT);
        ctx.frame(body);
        assert_eq!(ctx.focus(), None);
    }

    #[test]
    fn only_the_top_window_under_the_pointer_hovers() {
        let mut ctx = ctx();
        let body = |ctx: &mut Context<FixedMetrics>| {
            ctx.window("A", rect(0, 0, 100, 100), ContainerOption::NO_TITLE, |ctx| {
                ctx.layout_row(&[-1], 80);
                ctx.button("a");
            });
            ctx.window("B", rect(50, 50, 100, 100), ContainerOption::NO_TITLE, |ctx| {
                ctx.layout_row(&[-1], 80);
                ctx.button("b");
            });
        };
        let a = Id::from_str("A").derive(b"a");
        let b = Id::from_str("B").derive(b"b");

        // both buttons cover (60, 60); B was created last and is on top
        ctx.input_mut().mousemove(60, 60);
        ctx.frame(body);
        ctx.frame(body);
        assert_eq!(ctx.hover(), Some(b));

        ctx.input_mut().mousemove(20, 20);
        ctx.frame(body);
        assert_eq!(ctx.hover(), None);
        ctx.frame(body);
        assert_eq!(ctx.hover(), Some(a));
    }

    #[test]
    fn scroll_goes_to_the_container_under_the_pointer() {
        let mut ctx = ctx();
        let body = |ctx: &mut Context<FixedMetrics>| {
            ctx.window("list", rect(0, 0, 200, 100), ContainerOption::NO_TITLE, |ctx| {
                for i in 0..20 {
                    ctx.label(&format!("row {}", i));
                }
            });
        };
        ctx.input_mut().mousemove(50, 50);
        ctx.frame(body);
        ctx.frame(body);
        ctx.input_mut().scroll(0, 30);
        ctx.frame(body);
        assert_eq!(ctx.container("list").scroll.y, 30);

        // clamped to the content on the next frame
        ctx.input_mut().scroll(0, 10_000);
        ctx.frame(body);
        ctx.frame(body);
        let cnt = *ctx.container("list");
        let max_scroll = cnt.content_size.y + ctx.style().padding * 2 - cnt.body.height;
        assert_eq!(cnt.scroll.y, max_scroll);
    }

    #[test]
    fn closed_option_does_not_create_containers() {
        let mut ctx = ctx();
        ctx.frame(|ctx| {
            let shown = ctx.window("hidden", rect(0, 0, 10, 10), ContainerOption::CLOSED, |_| {});
            assert!(!shown);
        });
        assert!(ctx.container_by_id(Id::from_str("hidden")).is_none());
    }

    #[test]
    fn container_eviction_keeps_recent_windows() {
        let limits = Limits { container_pool: 2, ..Limits::default() };
        let mut ctx = Context::with_limits(FixedMetrics::default(), limits);
        ctx.frame(|ctx| {
            ctx.window("X", rect(0, 0, 50, 50), ContainerOption::NONE, |_| {});
            ctx.window("Y", rect(0, 0, 50, 50), ContainerOption::NONE, |_| {});
        });
        ctx.frame(|ctx| {
            ctx.window("X", rect(0, 0, 50, 50), ContainerOption::NONE, |_| {});
            ctx.window("Z", rect(0, 0, 50, 50), ContainerOption::NONE, |_| {});
        });
        assert!(ctx.container_by_id(Id::from_str("Y")).is_none());
        assert!(ctx.container_by_id(Id::from_str("X")).is_some());
        assert!(ctx.container_by_id(Id::from_str("Z")).is_some());
    }
}
