//! Module storage
//!
//! [`Module`] is the aggregate every section decoder appends to. All byte
//! ranges borrow the caller's buffer; cross-section references are plain
//! indices resolved on access.

use wvp_error::ExternKind;

use crate::{
    compact_index::CompactIndexVector,
    const_expr::ConstExpr,
    prelude::*,
    types::{FunctionType, GlobalType, MemoryType, TableType, ValueType},
};

/// `[begin, end)` byte range in the module buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    /// First byte
    pub begin: usize,
    /// One past the last byte
    pub end:   usize,
}

impl Span {
    /// Range `[begin, end)`
    #[must_use]
    pub const fn new(begin: usize, end: usize) -> Self {
        Self { begin, end }
    }

    /// Length in bytes
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end - self.begin
    }

    /// Whether the range is empty
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.begin == self.end
    }
}

/// Type section
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeSection {
    /// Section payload, `None` when absent
    pub span:  Option<Span>,
    /// Function types in index order
    pub types: Vec<FunctionType>,
}

/// Import descriptor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportDesc {
    /// Function import with its type index
    Func(u32),
    /// Table import
    Table(TableType),
    /// Memory import
    Memory(MemoryType),
    /// Global import
    Global(GlobalType),
}

impl ImportDesc {
    /// Kind of the imported entity
    #[must_use]
    pub const fn kind(&self) -> ExternKind {
        match self {
            Self::Func(_) => ExternKind::Func,
            Self::Table(_) => ExternKind::Table,
            Self::Memory(_) => ExternKind::Memory,
            Self::Global(_) => ExternKind::Global,
        }
    }
}

/// One import
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Import<'a> {
    /// Module name
    pub module_name: &'a str,
    /// Field name
    pub extern_name: &'a str,
    /// What is imported
    pub desc:        ImportDesc,
}

/// Import section
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportSection<'a> {
    /// Section payload, `None` when absent
    pub span:    Option<Span>,
    /// Imports in declaration order
    pub imports: Vec<Import<'a>>,
    /// Positions in `imports` grouped by [`ExternKind`]; entry `i` of a
    /// group is the import with index `i` in that kind's index space
    pub by_kind: [Vec<u32>; 4],
}

impl<'a> ImportSection<'a> {
    /// Number of imports of `kind`
    #[must_use]
    pub fn count(&self, kind: ExternKind) -> u32 {
        self.by_kind[kind.index()].len() as u32
    }

    /// The `index`-th import of `kind`
    #[must_use]
    pub fn get(&self, kind: ExternKind, index: u32) -> Option<&Import<'a>> {
        let pos = *self.by_kind[kind.index()].get(index as usize)?;
        self.imports.get(pos as usize)
    }

    /// Imports of `kind` in index order
    pub fn of_kind(&self, kind: ExternKind) -> impl Iterator<Item = &Import<'a>> + '_ {
        self.by_kind[kind.index()]
            .iter()
            .filter_map(move |&pos| self.imports.get(pos as usize))
    }

    /// Type of the `index`-th imported global
    #[must_use]
    pub fn global_type(&self, index: u32) -> Option<GlobalType> {
        match self.get(ExternKind::Global, index)?.desc {
            ImportDesc::Global(ty) => Some(ty),
            _ => None,
        }
    }

    /// Type index of the `index`-th imported function
    #[must_use]
    pub fn func_type_index(&self, index: u32) -> Option<u32> {
        match self.get(ExternKind::Func, index)?.desc {
            ImportDesc::Func(type_idx) => Some(type_idx),
            _ => None,
        }
    }
}

/// Function section
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FunctionSection {
    /// Section payload, `None` when absent
    pub span:         Option<Span>,
    /// Type index of each defined function
    pub type_indices: CompactIndexVector,
}

/// Table section
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableSection {
    /// Section payload, `None` when absent
    pub span:   Option<Span>,
    /// Defined tables
    pub tables: Vec<TableType>,
}

/// Memory section
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemorySection {
    /// Section payload, `None` when absent
    pub span:     Option<Span>,
    /// Defined memories
    pub memories: Vec<MemoryType>,
}

/// Defined global
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Global<'a> {
    /// Declared type
    pub ty:   GlobalType,
    /// Initializer, structurally validated; evaluated at instantiation
    pub init: ConstExpr<'a>,
}

/// Global section
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GlobalSection<'a> {
    /// Section payload, `None` when absent
    pub span:    Option<Span>,
    /// Defined globals
    pub globals: Vec<Global<'a>>,
}

/// One export
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Export<'a> {
    /// Export name
    pub name:  &'a str,
    /// Exported kind
    pub kind:  ExternKind,
    /// Index in the combined index space of `kind`
    pub index: u32,
}

/// Export section
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportSection<'a> {
    /// Section payload, `None` when absent
    pub span:    Option<Span>,
    /// Exports in declaration order
    pub exports: Vec<Export<'a>>,
    /// Positions in `exports` grouped by [`ExternKind`]
    pub by_kind: [Vec<u32>; 4],
}

impl<'a> ExportSection<'a> {
    /// Exports of `kind`
    pub fn of_kind(&self, kind: ExternKind) -> impl Iterator<Item = &Export<'a>> + '_ {
        self.by_kind[kind.index()]
            .iter()
            .filter_map(move |&pos| self.exports.get(pos as usize))
    }

    /// Export of `kind` named `name`
    #[must_use]
    pub fn find(&self, kind: ExternKind, name: &str) -> Option<&Export<'a>> {
        self.of_kind(kind).find(|export| export.name == name)
    }
}

/// Start section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StartSection {
    /// Section payload
    pub span:     Span,
    /// Start function index
    pub func_idx: u32,
}

/// Table element segment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementSegment<'a> {
    /// Target table
    pub table_idx:    u32,
    /// Offset expression, always `i32`
    pub offset:       ConstExpr<'a>,
    /// Function indices placed into the table
    pub func_indices: Vec<u32>,
}

/// Element section
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElementSection<'a> {
    /// Section payload, `None` when absent
    pub span:     Option<Span>,
    /// Segments in declaration order
    pub segments: Vec<ElementSegment<'a>>,
}

/// Run of locals sharing one type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalEntry {
    /// Number of locals
    pub count:      u32,
    /// Their type
    pub value_type: ValueType,
}

/// Function body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionBody<'a> {
    /// Body window after its size prefix, final `end` included
    pub span:            Span,
    /// Local declarations
    pub locals:          Vec<LocalEntry>,
    /// Parameters plus declared locals
    pub all_local_count: u32,
    /// Instruction bytes between the locals and the final `end`
    pub expr_span:       Span,
    /// Bytes of `expr_span`
    pub expr:            &'a [u8],
}

/// Code section
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeSection<'a> {
    /// Section payload, `None` when absent
    pub span:   Option<Span>,
    /// Bodies, positionally paired with the function section
    pub bodies: Vec<FunctionBody<'a>>,
}

/// Data segment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataSegment<'a> {
    /// Target memory
    pub memory_idx: u32,
    /// Offset expression, always `i32`
    pub offset:     ConstExpr<'a>,
    /// Payload range
    pub bytes_span: Span,
    /// Payload bytes
    pub bytes:      &'a [u8],
}

/// Data section
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataSection<'a> {
    /// Section payload, `None` when absent
    pub span:     Option<Span>,
    /// Segments in declaration order
    pub segments: Vec<DataSegment<'a>>,
}

/// Custom section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CustomSection<'a> {
    /// Section payload
    pub span:         Span,
    /// Section name
    pub name:         &'a str,
    /// Range after the name
    pub payload_span: Span,
    /// Bytes after the name
    pub payload:      &'a [u8],
}

/// Fully decoded binfmt v1 module
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Module<'a> {
    /// The buffer every span points into
    pub bytes:    &'a [u8],
    /// Type section
    pub types:    TypeSection,
    /// Import section
    pub imports:  ImportSection<'a>,
    /// Function section
    pub funcs:    FunctionSection,
    /// Table section
    pub tables:   TableSection,
    /// Memory section
    pub memories: MemorySection,
    /// Global section
    pub globals:  GlobalSection<'a>,
    /// Export section
    pub exports:  ExportSection<'a>,
    /// Start section
    pub start:    Option<StartSection>,
    /// Element section
    pub elements: ElementSection<'a>,
    /// Code section
    pub code:     CodeSection<'a>,
    /// Data section
    pub data:     DataSection<'a>,
    /// Custom sections in order of appearance
    pub customs:  Vec<CustomSection<'a>>,
}

impl<'a> Module<'a> {
    /// Empty storage over `bytes`
    #[must_use]
    pub fn new(bytes: &'a [u8]) -> Self {
        Self {
            bytes,
            ..Self::default()
        }
    }

    /// Number of imported entities of `kind`
    #[must_use]
    pub fn imported_count(&self, kind: ExternKind) -> u32 {
        self.imports.count(kind)
    }

    /// Number of locally defined entities of `kind`
    #[must_use]
    pub fn defined_count(&self, kind: ExternKind) -> u32 {
        let len = match kind {
            ExternKind::Func => self.funcs.type_indices.len(),
            ExternKind::Table => self.tables.tables.len(),
            ExternKind::Memory => self.memories.memories.len(),
            ExternKind::Global => self.globals.globals.len(),
        };
        len as u32
    }

    /// Imported plus defined count of `kind`
    #[must_use]
    pub fn combined_count(&self, kind: ExternKind) -> u32 {
        self.imported_count(kind)
            .saturating_add(self.defined_count(kind))
    }

    /// Number of defined functions
    #[must_use]
    pub fn defined_function_count(&self) -> u32 {
        self.defined_count(ExternKind::Func)
    }

    /// Type index of a function in the combined index space
    #[must_use]
    pub fn function_type_index(&self, func_idx: u32) -> Option<u32> {
        let imported = self.imported_count(ExternKind::Func);
        if func_idx < imported {
            self.imports.func_type_index(func_idx)
        } else {
            self.funcs.type_indices.get((func_idx - imported) as usize)
        }
    }

    /// Signature of a function in the combined index space
    #[must_use]
    pub fn function_type(&self, func_idx: u32) -> Option<&FunctionType> {
        let type_idx = self.function_type_index(func_idx)?;
        self.types.types.get(type_idx as usize)
    }

    /// Type of a global in the combined index space
    #[must_use]
    pub fn global_type(&self, global_idx: u32) -> Option<GlobalType> {
        let imported = self.imported_count(ExternKind::Global);
        if global_idx < imported {
            self.imports.global_type(global_idx)
        } else {
            self.globals
                .globals
                .get((global_idx - imported) as usize)
                .map(|global| global.ty)
        }
    }

    /// Body of a function in the combined index space, `None` for imports
    #[must_use]
    pub fn function_body(&self, func_idx: u32) -> Option<&FunctionBody<'a>> {
        let local = func_idx.checked_sub(self.imported_count(ExternKind::Func))?;
        self.code.bodies.get(local as usize)
    }

    /// First custom section called `name`
    #[must_use]
    pub fn custom_section(&self, name: &str) -> Option<&CustomSection<'a>> {
        self.customs.iter().find(|custom| custom.name == name)
    }
}
