//! Textual IR dump.
//!
//! ```text
//! ; module main (main.pr)
//! declare @printf
//! @str.0 = [4 char] "%d\0A\00"
//!
//! define @main {
//!   %0 = gep [4 char] @str.0, 0, 0
//!   %1 = call @printf(%0, 42) : (*char, ...)
//! }
//! ```

use std::fmt::{self, Write};

use pr_ir::StringLookup;
use pr_types::{Param, TypePool};

use super::{FunctionBody, Insn, IrModule, Value, ValueKind};

/// Quote `bytes` as a C-style literal with hex escapes.
///
/// Control bytes, bytes above `~`, `"` and `\` are written as `\XX`; the
/// result always ends in an explicit `\00` terminator.
pub fn repr(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() + 6);
    out.push('"');
    for &b in bytes {
        if !(32..=126).contains(&b) || b == b'"' || b == b'\\' {
            let _ = write!(out, "\\{b:02X}");
        } else {
            out.push(char::from(b));
        }
    }
    out.push_str("\\00\"");
    out
}

/// `Display` adapter pairing an [`IrModule`] with the tables needed to
/// render names and types.
pub struct ModuleDump<'a> {
    module: &'a IrModule,
    pool: &'a TypePool,
    lookup: &'a dyn StringLookup,
}

impl IrModule {
    pub fn dump<'a>(&'a self, pool: &'a TypePool, lookup: &'a dyn StringLookup) -> ModuleDump<'a> {
        ModuleDump {
            module: self,
            pool,
            lookup,
        }
    }
}

impl ModuleDump<'_> {
    fn value(&self, f: &mut fmt::Formatter<'_>, value: &Value) -> fmt::Result {
        match &value.kind {
            ValueKind::Int(i) => write!(f, "{i}"),
            ValueKind::Str(s) => f.write_str(&repr(self.lookup.lookup(*s).as_bytes())),
            ValueKind::Local(id) => write!(f, "%{}", id.raw()),
            ValueKind::Global(id) => {
                let name = self
                    .module
                    .globals
                    .get(id.index())
                    .map_or("global", |g| self.lookup.lookup(g.name));
                write!(f, "@{name}.{}", id.raw())
            }
        }
    }

    fn values(&self, f: &mut fmt::Formatter<'_>, values: &[Value]) -> fmt::Result {
        for (i, v) in values.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            self.value(f, v)?;
        }
        Ok(())
    }

    fn proto(&self, f: &mut fmt::Formatter<'_>, params: &[Param]) -> fmt::Result {
        f.write_str(" : (")?;
        for (i, p) in params.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            match (p.ty, p.variadic) {
                (Some(ty), true) => write!(f, "{}...", self.pool.display(ty, self.lookup))?,
                (None, true) => f.write_str("...")?,
                (Some(ty), false) => f.write_str(&self.pool.display(ty, self.lookup))?,
                (None, false) => f.write_str("?")?,
            }
        }
        f.write_str(")")
    }

    fn insn(&self, f: &mut fmt::Formatter<'_>, insn: &Insn) -> fmt::Result {
        match insn {
            Insn::Label(l) => return writeln!(f, "{l}:"),
            Insn::Br {
                cond,
                if_true,
                if_false,
            } => {
                f.write_str("  br ")?;
                self.value(f, cond)?;
                match if_true {
                    Some(t) => write!(f, ", {t}, {if_false}")?,
                    None => write!(f, ", L?, {if_false}")?,
                }
            }
            Insn::Call {
                callee,
                ret,
                args,
                proto,
            } => {
                f.write_str("  ")?;
                if let Some(ret) = ret {
                    self.value(f, ret)?;
                    f.write_str(" = ")?;
                }
                write!(f, "call @{}(", self.lookup.lookup(*callee))?;
                self.values(f, args)?;
                f.write_str(")")?;
                if let Some(proto) = proto {
                    self.proto(f, proto)?;
                }
            }
            Insn::Gep {
                ret,
                ty,
                base,
                index,
            } => {
                f.write_str("  ")?;
                self.value(f, ret)?;
                write!(f, " = gep {} ", self.pool.display(*ty, self.lookup))?;
                self.value(f, base)?;
                for i in index {
                    f.write_str(", ")?;
                    self.value(f, i)?;
                }
            }
            Insn::ExtractValue { ret, value, index } => {
                f.write_str("  ")?;
                self.value(f, ret)?;
                f.write_str(" = extractvalue ")?;
                self.value(f, value)?;
                for i in index {
                    write!(f, ", {i}")?;
                }
            }
            Insn::Unreachable => f.write_str("  unreachable")?,
        }
        writeln!(f)
    }

    fn function(&self, f: &mut fmt::Formatter<'_>, body: &FunctionBody) -> fmt::Result {
        writeln!(f, "define @{} {{", self.lookup.lookup(body.name))?;
        for insn in &body.insns {
            self.insn(f, insn)?;
        }
        writeln!(f, "}}")
    }
}

impl fmt::Display for ModuleDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let m = self.module;
        writeln!(f, "; module {} ({})", m.module, m.path.display())?;
        for name in m.imported() {
            writeln!(f, "declare @{}", self.lookup.lookup(*name))?;
        }
        for g in &m.globals {
            writeln!(
                f,
                "@{}.{} = {} {}",
                self.lookup.lookup(g.name),
                g.id.raw(),
                self.pool.display(g.ty, self.lookup),
                repr(&g.data)
            )?;
        }
        for body in &m.functions {
            writeln!(f)?;
            self.function(f, body)?;
        }
        Ok(())
    }
}
