//! Function builder.
//!
//! Appends instructions to one function body. Intrinsic macros use it to
//! write hand-built control flow: allocate labels, emit a branch whose true
//! target is not known yet, and resolve it once the target is placed.

use pr_ir::{Name, TypeId};

use crate::ir::{FunctionBody, Insn, Label, LocalId, Value};

/// A branch emitted with its true target still open.
///
/// Must be handed back to [`FunctionBuilder::resolve_branch`].
#[must_use = "a pending branch must be resolved before the function is finished"]
#[derive(Debug)]
pub struct PendingBranch {
    index: usize,
}

pub struct FunctionBuilder {
    name: Name,
    insns: Vec<Insn>,
    locals: Vec<TypeId>,
    /// Instruction index at which each label was placed.
    label_positions: Vec<Option<usize>>,
    pending: usize,
}

impl FunctionBuilder {
    pub fn new(name: Name) -> Self {
        FunctionBuilder {
            name,
            insns: Vec::new(),
            locals: Vec::new(),
            label_positions: Vec::new(),
            pending: 0,
        }
    }

    #[inline]
    pub fn name(&self) -> Name {
        self.name
    }

    #[inline]
    pub fn insns(&self) -> &[Insn] {
        &self.insns
    }

    // Allocation

    /// Allocate a fresh local of type `ty`.
    ///
    /// # Panics
    /// Panics if the function exceeds `u32::MAX` locals.
    pub fn fresh_local(&mut self, ty: TypeId) -> Value {
        let id = LocalId::new(
            u32::try_from(self.locals.len())
                .unwrap_or_else(|_| panic!("function exceeded u32::MAX locals")),
        );
        self.locals.push(ty);
        Value::local(id, ty)
    }

    /// Allocate the next label. Labels are strictly increasing.
    pub fn make_label(&mut self) -> Label {
        let label = Label::new(
            u32::try_from(self.label_positions.len())
                .unwrap_or_else(|_| panic!("function exceeded u32::MAX labels")),
        );
        self.label_positions.push(None);
        label
    }

    // Emission

    pub fn push(&mut self, insn: Insn) {
        debug_assert!(
            !matches!(insn, Insn::Label(_)),
            "labels must be placed with push_label"
        );
        self.insns.push(insn);
    }

    /// Place `label` at the current position.
    pub fn push_label(&mut self, label: Label) {
        let slot = &mut self.label_positions[label.index()];
        debug_assert!(slot.is_none(), "label {label} placed twice");
        *slot = Some(self.insns.len());
        self.insns.push(Insn::Label(label));
    }

    /// Emit `br cond, ?, if_false`, leaving the true target open.
    pub fn reserve_branch(&mut self, cond: Value, if_false: Label) -> PendingBranch {
        let index = self.insns.len();
        self.insns.push(Insn::Br {
            cond,
            if_true: None,
            if_false,
        });
        self.pending += 1;
        PendingBranch { index }
    }

    /// Close a pending branch. `if_true` must lie after the branch.
    pub fn resolve_branch(&mut self, pending: PendingBranch, if_true: Label) {
        if let Some(Some(pos)) = self.label_positions.get(if_true.index()) {
            debug_assert!(
                *pos > pending.index,
                "branch at {} resolved backwards to {if_true} at {pos}",
                pending.index
            );
        }
        let resolved = match self.insns.get_mut(pending.index) {
            Some(Insn::Br { if_true: slot, .. }) if slot.is_none() => {
                *slot = Some(if_true);
                true
            }
            _ => false,
        };
        debug_assert!(resolved, "pending branch at {} is not an open br", pending.index);
        if resolved {
            self.pending -= 1;
        }
    }

    /// Consume the builder and produce a finished [`FunctionBody`].
    pub fn finish(self) -> FunctionBody {
        debug_assert!(
            self.pending == 0,
            "function finished with {} unresolved branch(es)",
            self.pending
        );
        FunctionBody {
            name: self.name,
            insns: self.insns,
            locals: self.locals,
        }
    }
}
