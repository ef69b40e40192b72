//! zasm-catalog - Static instruction catalog of the zasm front end.
//!
//! Four instruction classes live here: conditional-assembly, assembler,
//! machine, and extended mnemonics. Each class is a static array sorted by
//! name; lookups are binary searches, so entries keep stable addresses and
//! the mnemonic → base-instruction references stay valid for the lifetime
//! of the process. The machine and mnemonic tables are filtered once per
//! catalog instance by the active system architecture.
//!
//! # Examples
//!
//! ```
//! use zasm_catalog::{InstructionCatalog, SystemArchitecture};
//!
//! let catalog = InstructionCatalog::new(SystemArchitecture::Uni);
//! let lr = catalog.find_machine("LR").unwrap();
//! assert_eq!(lr.operands().len(), 2);
//!
//! let b = catalog.find_mnemonic("B").unwrap();
//! assert_eq!(b.base.name(), "BC");
//! ```

pub mod format;
mod machine_table;
mod mnemonic_table;
pub mod support;

pub use format::{MachFormat, OperandFormat, OperandKind};
pub use support::{SupportedSystem, SystemArchitecture};

/// A conditional-assembly instruction.
#[derive(Debug)]
pub struct CaInstruction {
    name: &'static str,
    operandless: bool,
}

impl CaInstruction {
    const fn new(name: &'static str, operandless: bool) -> Self {
        Self { name, operandless }
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Whether the instruction takes no operands (`ANOP`, `MEND`, ...).
    #[inline]
    pub fn operandless(&self) -> bool {
        self.operandless
    }
}

const CA_INSTRUCTIONS: &[CaInstruction] = &[
    CaInstruction::new("ACTR", false),
    CaInstruction::new("AEJECT", true),
    CaInstruction::new("AGO", false),
    CaInstruction::new("AIF", false),
    CaInstruction::new("ANOP", true),
    CaInstruction::new("AREAD", false),
    CaInstruction::new("ASPACE", false),
    CaInstruction::new("GBLA", false),
    CaInstruction::new("GBLB", false),
    CaInstruction::new("GBLC", false),
    CaInstruction::new("LCLA", false),
    CaInstruction::new("LCLB", false),
    CaInstruction::new("LCLC", false),
    CaInstruction::new("MACRO", true),
    CaInstruction::new("MEND", true),
    CaInstruction::new("MEXIT", true),
    CaInstruction::new("MHELP", false),
    CaInstruction::new("SETA", false),
    CaInstruction::new("SETB", false),
    CaInstruction::new("SETC", false),
];

/// An assembler instruction with its operand arity contract.
#[derive(Debug)]
pub struct AssemblerInstruction {
    name: &'static str,
    min_operands: i16,
    /// Maximum operand count, -1 for unbounded.
    max_operands: i16,
    has_ord_symbols: bool,
    description: &'static str,
    postpone_dependencies: bool,
}

impl AssemblerInstruction {
    const fn new(
        name: &'static str,
        min_operands: i16,
        max_operands: i16,
        has_ord_symbols: bool,
        description: &'static str,
    ) -> Self {
        Self {
            name,
            min_operands,
            max_operands,
            has_ord_symbols,
            description,
            postpone_dependencies: false,
        }
    }

    const fn new_postponed(
        name: &'static str,
        min_operands: i16,
        max_operands: i16,
        has_ord_symbols: bool,
        description: &'static str,
    ) -> Self {
        Self {
            name,
            min_operands,
            max_operands,
            has_ord_symbols,
            description,
            postpone_dependencies: true,
        }
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub fn min_operands(&self) -> i16 {
        self.min_operands
    }

    /// -1 means unbounded.
    #[inline]
    pub fn max_operands(&self) -> i16 {
        self.max_operands
    }

    #[inline]
    pub fn has_ord_symbols(&self) -> bool {
        self.has_ord_symbols
    }

    #[inline]
    pub fn description(&self) -> &'static str {
        self.description
    }

    #[inline]
    pub fn postpone_dependencies(&self) -> bool {
        self.postpone_dependencies
    }

    /// Whether `count` operands satisfy the arity contract.
    pub fn arity_ok(&self, count: usize) -> bool {
        let count = count as i16;
        count >= self.min_operands && (self.max_operands == -1 || count <= self.max_operands)
    }
}

const ASSEMBLER_INSTRUCTIONS: &[AssemblerInstruction] = &[
    AssemblerInstruction::new("*PROCESS", 1, -1, false, ""),
    AssemblerInstruction::new("ACONTROL", 1, -1, false, "<selection>+"),
    AssemblerInstruction::new("ADATA", 5, 5, false, "value1,value2,value3,value4,character_string"),
    AssemblerInstruction::new("AINSERT", 2, 2, false, "'record',BACK|FRONT"),
    AssemblerInstruction::new("ALIAS", 1, 1, false, "alias_string"),
    AssemblerInstruction::new("AMODE", 1, 1, false, "amode_option"),
    AssemblerInstruction::new("CATTR", 1, -1, false, "attribute+"),
    AssemblerInstruction::new("CCW", 4, 4, true, "command_code,data_address,flags,data_count"),
    AssemblerInstruction::new("CCW0", 4, 4, true, "command_code,data_address,flags,data_count"),
    AssemblerInstruction::new("CCW1", 4, 4, true, "command_code,data_address,flags,data_count"),
    AssemblerInstruction::new("CEJECT", 0, 1, true, "?number_of_lines"),
    AssemblerInstruction::new("CNOP", 2, 2, true, "byte,boundary"),
    AssemblerInstruction::new("COM", 0, 0, false, ""),
    AssemblerInstruction::new("COPY", 1, 1, false, "member"),
    AssemblerInstruction::new("CSECT", 0, 0, false, ""),
    AssemblerInstruction::new("CXD", 0, 0, false, ""),
    AssemblerInstruction::new("DC", 1, -1, true, "<operand>+"),
    AssemblerInstruction::new_postponed("DROP", 0, -1, true, "?<<base_register|label>+>"),
    AssemblerInstruction::new("DS", 1, -1, true, "<operand>+"),
    AssemblerInstruction::new("DSECT", 0, 0, false, ""),
    AssemblerInstruction::new("DXD", 1, -1, true, "<operand>+"),
    AssemblerInstruction::new("EJECT", 0, 0, false, ""),
    AssemblerInstruction::new("END", 0, 2, true, "?expression,?language"),
    AssemblerInstruction::new("ENTRY", 1, -1, true, "entry_point+"),
    AssemblerInstruction::new(
        "EQU",
        1,
        5,
        true,
        "value,?<length_attribute_value>,?<type_attribute_value>,?<program_type_value>,?<assembler_type_value>",
    ),
    AssemblerInstruction::new("EXITCTL", 2, 5, false, "exit_type,control_value+"),
    AssemblerInstruction::new("EXTRN", 1, -1, false, "<external_symbol>+|PART(<external_symbol>+"),
    AssemblerInstruction::new("ICTL", 1, 3, false, "begin,?<end>,?<continue>"),
    AssemblerInstruction::new("ISEQ", 0, 2, false, "?<left,right>"),
    AssemblerInstruction::new("LOCTR", 0, 0, false, ""),
    AssemblerInstruction::new("LTORG", 0, 0, false, ""),
    AssemblerInstruction::new("MNOTE", 1, 2, false, "?<<severity|*|>,>message"),
    AssemblerInstruction::new("OPSYN", 0, 1, false, "?operation_code_2"),
    AssemblerInstruction::new("ORG", 0, 3, true, "expression?<,boundary?<,offset>>"),
    AssemblerInstruction::new("POP", 1, 4, false, "<PRINT|USING|ACONTROL>+,?NOPRINT"),
    AssemblerInstruction::new("PRINT", 1, -1, false, "operand+"),
    AssemblerInstruction::new("PUNCH", 1, 1, false, "string"),
    AssemblerInstruction::new("PUSH", 1, 4, false, "<PRINT|USING|ACONTROL>+,?NOPRINT"),
    AssemblerInstruction::new("REPRO", 0, 0, false, ""),
    AssemblerInstruction::new("RMODE", 1, 1, false, "rmode_option"),
    AssemblerInstruction::new("RSECT", 0, 0, false, ""),
    AssemblerInstruction::new("SPACE", 0, 1, true, "?number_of_lines"),
    AssemblerInstruction::new("START", 0, 1, true, "?expression"),
    AssemblerInstruction::new("TITLE", 1, 1, false, "title_string"),
    AssemblerInstruction::new_postponed("USING", 2, 17, true, "operand+"),
    AssemblerInstruction::new("WXTRN", 1, -1, false, "<external_symbol>+|PART(<external_symbol>+"),
    AssemblerInstruction::new("XATTR", 1, -1, false, "attribute+"),
];

/// Instruction format: the encoding plus its operand slots.
#[derive(Debug)]
pub struct InstructionFormat {
    pub format: MachFormat,
    pub operands: &'static [OperandFormat],
}

/// A machine instruction.
#[derive(Debug)]
pub struct MachineInstruction {
    name: &'static str,
    format: &'static InstructionFormat,
    page: u16,
    support: SupportedSystem,
}

impl MachineInstruction {
    pub(crate) const fn new(
        name: &'static str,
        format: &'static InstructionFormat,
        page: u16,
        support: SupportedSystem,
    ) -> Self {
        Self {
            name,
            format,
            page,
            support,
        }
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub fn format(&self) -> MachFormat {
        self.format.format
    }

    #[inline]
    pub fn operands(&self) -> &'static [OperandFormat] {
        self.format.operands
    }

    /// Number of trailing optional operand slots.
    pub fn optional_operand_count(&self) -> usize {
        self.format.operands.iter().filter(|o| o.optional).count()
    }

    /// Principles of Operation page.
    #[inline]
    pub fn page(&self) -> u16 {
        self.page
    }

    #[inline]
    pub fn support(&self) -> SupportedSystem {
        self.support
    }
}

/// An extended mnemonic: a base machine instruction with some operand
/// positions pre-bound to fixed values.
#[derive(Debug)]
pub struct Mnemonic {
    name: &'static str,
    base: &'static str,
    transforms: &'static [(u8, u16)],
    support: SupportedSystem,
}

impl Mnemonic {
    pub(crate) const fn new(
        name: &'static str,
        base: &'static str,
        transforms: &'static [(u8, u16)],
        support: SupportedSystem,
    ) -> Self {
        Self {
            name,
            base,
            transforms,
            support,
        }
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Name of the base machine instruction.
    #[inline]
    pub fn base_name(&self) -> &'static str {
        self.base
    }

    /// `(operand_index, fixed_value)` pre-bindings.
    #[inline]
    pub fn transforms(&self) -> &'static [(u8, u16)] {
        self.transforms
    }

    #[inline]
    pub fn support(&self) -> SupportedSystem {
        self.support
    }
}

/// Look up a conditional-assembly instruction by name.
pub fn find_ca(name: &str) -> Option<&'static CaInstruction> {
    CA_INSTRUCTIONS
        .binary_search_by(|i| i.name.cmp(name))
        .ok()
        .map(|i| &CA_INSTRUCTIONS[i])
}

/// Look up an assembler instruction by name.
pub fn find_assembler(name: &str) -> Option<&'static AssemblerInstruction> {
    ASSEMBLER_INSTRUCTIONS
        .binary_search_by(|i| i.name.cmp(name))
        .ok()
        .map(|i| &ASSEMBLER_INSTRUCTIONS[i])
}

/// Look up a machine instruction by name, ignoring the architecture filter.
pub fn find_machine_any(name: &str) -> Option<&'static MachineInstruction> {
    machine_table::MACHINE_INSTRUCTIONS
        .binary_search_by(|i| i.name.cmp(name))
        .ok()
        .map(|i| &machine_table::MACHINE_INSTRUCTIONS[i])
}

/// Look up a mnemonic by name, ignoring the architecture filter.
pub fn find_mnemonic_any(name: &str) -> Option<&'static Mnemonic> {
    mnemonic_table::MNEMONIC_CODES
        .binary_search_by(|i| i.name.cmp(name))
        .ok()
        .map(|i| &mnemonic_table::MNEMONIC_CODES[i])
}

/// All conditional-assembly instructions.
pub fn all_ca_instructions() -> &'static [CaInstruction] {
    CA_INSTRUCTIONS
}

/// All assembler instructions.
pub fn all_assembler_instructions() -> &'static [AssemblerInstruction] {
    ASSEMBLER_INSTRUCTIONS
}

/// All machine instructions, unfiltered.
pub fn all_machine_instructions() -> &'static [MachineInstruction] {
    machine_table::MACHINE_INSTRUCTIONS
}

/// All mnemonics, unfiltered.
pub fn all_mnemonics() -> &'static [Mnemonic] {
    mnemonic_table::MNEMONIC_CODES
}

/// A mnemonic with its base machine instruction resolved.
#[derive(Clone, Copy, Debug)]
pub struct ResolvedMnemonic {
    pub mnemonic: &'static Mnemonic,
    pub base: &'static MachineInstruction,
}

impl ResolvedMnemonic {
    #[inline]
    pub fn name(&self) -> &'static str {
        self.mnemonic.name()
    }
}

/// The instruction catalog filtered by the active architecture.
///
/// The CA and assembler classes are architecture-independent; the machine
/// and mnemonic classes are filtered at construction. Every mnemonic's
/// base reference is resolved here; a base missing from the machine table
/// would be a table defect and panics.
pub struct InstructionCatalog {
    arch: SystemArchitecture,
    machine: Vec<&'static MachineInstruction>,
    mnemonics: Vec<ResolvedMnemonic>,
}

impl InstructionCatalog {
    pub fn new(arch: SystemArchitecture) -> Self {
        let machine: Vec<_> = machine_table::MACHINE_INSTRUCTIONS
            .iter()
            .filter(|i| i.support.is_supported(arch))
            .collect();

        let mnemonics: Vec<_> = mnemonic_table::MNEMONIC_CODES
            .iter()
            .filter(|m| m.support.is_supported(arch))
            .map(|mnemonic| ResolvedMnemonic {
                mnemonic,
                base: find_machine_any(mnemonic.base)
                    .unwrap_or_else(|| panic!("mnemonic {} has no base instruction", mnemonic.name)),
            })
            .collect();

        Self {
            arch,
            machine,
            mnemonics,
        }
    }

    #[inline]
    pub fn arch(&self) -> SystemArchitecture {
        self.arch
    }

    /// Machine instructions available under the active architecture.
    pub fn machine_instructions(&self) -> &[&'static MachineInstruction] {
        &self.machine
    }

    /// Mnemonics available under the active architecture.
    pub fn mnemonics(&self) -> &[ResolvedMnemonic] {
        &self.mnemonics
    }

    /// Look up an available machine instruction.
    pub fn find_machine(&self, name: &str) -> Option<&'static MachineInstruction> {
        self.machine
            .binary_search_by(|i| i.name.cmp(name))
            .ok()
            .map(|i| self.machine[i])
    }

    /// Look up an available mnemonic.
    pub fn find_mnemonic(&self, name: &str) -> Option<&ResolvedMnemonic> {
        self.mnemonics
            .binary_search_by(|m| m.mnemonic.name.cmp(name))
            .ok()
            .map(|i| &self.mnemonics[i])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ca_table_sorted() {
        assert!(CA_INSTRUCTIONS.windows(2).all(|w| w[0].name < w[1].name));
    }

    #[test]
    fn test_assembler_table_sorted() {
        assert!(ASSEMBLER_INSTRUCTIONS.windows(2).all(|w| w[0].name < w[1].name));
    }

    #[test]
    fn test_machine_table_sorted() {
        assert!(all_machine_instructions().windows(2).all(|w| w[0].name < w[1].name));
    }

    #[test]
    fn test_mnemonic_table_sorted() {
        assert!(all_mnemonics().windows(2).all(|w| w[0].name < w[1].name));
    }

    #[test]
    fn test_every_known_name_is_found() {
        for i in all_ca_instructions() {
            assert!(find_ca(i.name()).is_some(), "{}", i.name());
        }
        for i in all_assembler_instructions() {
            assert!(find_assembler(i.name()).is_some(), "{}", i.name());
        }
        for i in all_machine_instructions() {
            assert!(find_machine_any(i.name()).is_some(), "{}", i.name());
        }
        for m in all_mnemonics() {
            assert!(find_mnemonic_any(m.name()).is_some(), "{}", m.name());
        }
    }

    #[test]
    fn test_unknown_names_are_absent() {
        assert!(find_ca("SETD").is_none());
        assert!(find_assembler("NOSUCH").is_none());
        assert!(find_machine_any("ZZZZZ").is_none());
        assert!(find_mnemonic_any("ZZZZZ").is_none());
    }

    #[test]
    fn test_every_mnemonic_base_resolves() {
        for m in all_mnemonics() {
            assert!(
                find_machine_any(m.base_name()).is_some(),
                "mnemonic {} references missing base {}",
                m.name(),
                m.base_name()
            );
        }
    }

    #[test]
    fn test_classic_branch_mnemonics() {
        let catalog = InstructionCatalog::new(SystemArchitecture::Uni);

        let b = catalog.find_mnemonic("B").unwrap();
        assert_eq!(b.base.name(), "BC");
        assert_eq!(b.mnemonic.transforms(), &[(0, 15)]);

        let be = catalog.find_mnemonic("BE").unwrap();
        assert_eq!(be.mnemonic.transforms(), &[(0, 8)]);

        let ber = catalog.find_mnemonic("BER").unwrap();
        assert_eq!(ber.base.name(), "BCR");
    }

    #[test]
    fn test_architecture_filter_reduces_tables() {
        let uni = InstructionCatalog::new(SystemArchitecture::Uni);
        let dos = InstructionCatalog::new(SystemArchitecture::Dos);
        assert!(dos.machine_instructions().len() < uni.machine_instructions().len());

        // AGSI arrived with z10 (generation 4)
        let z3 = InstructionCatalog::new(SystemArchitecture::Zs3);
        let z4 = InstructionCatalog::new(SystemArchitecture::Zs4);
        assert!(z3.find_machine("AGSI").is_none());
        assert!(z4.find_machine("AGSI").is_some());
    }

    #[test]
    fn test_common_instruction_shapes() {
        let lr = find_machine_any("LR").unwrap();
        assert_eq!(lr.format(), MachFormat::RR);
        assert_eq!(lr.operands().len(), 2);

        let l = find_machine_any("L").unwrap();
        assert_eq!(l.format(), MachFormat::RX_a);

        let mvc = find_machine_any("MVC").unwrap();
        assert_eq!(mvc.format(), MachFormat::SS_a);
        assert!(mvc.operands()[0].is_address());
    }

    #[test]
    fn test_assembler_arity() {
        let dc = find_assembler("DC").unwrap();
        assert!(dc.arity_ok(1));
        assert!(dc.arity_ok(30));
        assert!(!dc.arity_ok(0));

        let cnop = find_assembler("CNOP").unwrap();
        assert!(cnop.arity_ok(2));
        assert!(!cnop.arity_ok(3));

        assert!(find_assembler("USING").unwrap().postpone_dependencies());
    }

    #[test]
    fn test_catalog_scale() {
        assert!(all_machine_instructions().len() > 900);
        assert!(all_mnemonics().len() > 450);
    }
}
