//! Static table of extended mnemonics.
//!
//! Each entry names its base machine instruction and carries the operand
//! pre-bindings applied before the user-supplied operands are matched.

use crate::support::{since_zs, DOS, ESA, UNI, UNKNOWN, XA, _370};
use crate::Mnemonic;

#[rustfmt::skip]
pub(crate) const MNEMONIC_CODES: &[Mnemonic] = &[
    Mnemonic::new("B", "BC", &[(0, 15)], UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    Mnemonic::new("BE", "BC", &[(0, 8)], UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    Mnemonic::new("BER", "BCR", &[(0, 8)], UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    Mnemonic::new("BH", "BC", &[(0, 2)], UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    Mnemonic::new("BHR", "BCR", &[(0, 2)], UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    Mnemonic::new("BI", "BIC", &[(0, 15)], UNI.with(since_zs(8))),
    Mnemonic::new("BIE", "BIC", &[(0, 8)], UNI.with(since_zs(8))),
    Mnemonic::new("BIH", "BIC", &[(0, 2)], UNI.with(since_zs(8))),
    Mnemonic::new("BIL", "BIC", &[(0, 4)], UNI.with(since_zs(8))),
    Mnemonic::new("BIM", "BIC", &[(0, 4)], UNI.with(since_zs(8))),
    Mnemonic::new("BINE", "BIC", &[(0, 7)], UNI.with(since_zs(8))),
    Mnemonic::new("BINH", "BIC", &[(0, 13)], UNI.with(since_zs(8))),
    Mnemonic::new("BINL", "BIC", &[(0, 11)], UNI.with(since_zs(8))),
    Mnemonic::new("BINM", "BIC", &[(0, 11)], UNI.with(since_zs(8))),
    Mnemonic::new("BINO", "BIC", &[(0, 14)], UNI.with(since_zs(8))),
    Mnemonic::new("BINP", "BIC", &[(0, 13)], UNI.with(since_zs(8))),
    Mnemonic::new("BINZ", "BIC", &[(0, 7)], UNI.with(since_zs(8))),
    Mnemonic::new("BIO", "BIC", &[(0, 1)], UNI.with(since_zs(8))),
    Mnemonic::new("BIP", "BIC", &[(0, 2)], UNI.with(since_zs(8))),
    Mnemonic::new("BIZ", "BIC", &[(0, 8)], UNI.with(since_zs(8))),
    Mnemonic::new("BL", "BC", &[(0, 4)], UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    Mnemonic::new("BLR", "BCR", &[(0, 4)], UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    Mnemonic::new("BM", "BC", &[(0, 4)], UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    Mnemonic::new("BMR", "BCR", &[(0, 4)], UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    Mnemonic::new("BNE", "BC", &[(0, 7)], UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    Mnemonic::new("BNER", "BCR", &[(0, 7)], UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    Mnemonic::new("BNH", "BC", &[(0, 13)], UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    Mnemonic::new("BNHR", "BCR", &[(0, 13)], UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    Mnemonic::new("BNL", "BC", &[(0, 11)], UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    Mnemonic::new("BNLR", "BCR", &[(0, 11)], UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    Mnemonic::new("BNM", "BC", &[(0, 11)], UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    Mnemonic::new("BNMR", "BCR", &[(0, 11)], UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    Mnemonic::new("BNO", "BC", &[(0, 14)], UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    Mnemonic::new("BNOR", "BCR", &[(0, 14)], UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    Mnemonic::new("BNP", "BC", &[(0, 13)], UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    Mnemonic::new("BNPR", "BCR", &[(0, 13)], UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    Mnemonic::new("BNZ", "BC", &[(0, 7)], UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    Mnemonic::new("BNZR", "BCR", &[(0, 7)], UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    Mnemonic::new("BO", "BC", &[(0, 1)], UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    Mnemonic::new("BOR", "BCR", &[(0, 1)], UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    Mnemonic::new("BP", "BC", &[(0, 2)], UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    Mnemonic::new("BPR", "BCR", &[(0, 2)], UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    Mnemonic::new("BR", "BCR", &[(0, 15)], UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    Mnemonic::new("BRE", "BRC", &[(0, 8)], UNI.with(ESA).with(since_zs(1))),
    Mnemonic::new("BREL", "BRCL", &[(0, 8)], UNI.with(since_zs(1))),
    Mnemonic::new("BRH", "BRC", &[(0, 2)], UNI.with(ESA).with(since_zs(1))),
    Mnemonic::new("BRHL", "BRCL", &[(0, 2)], UNI.with(since_zs(1))),
    Mnemonic::new("BRL", "BRC", &[(0, 4)], UNI.with(ESA).with(since_zs(1))),
    Mnemonic::new("BRLL", "BRCL", &[(0, 4)], UNI.with(since_zs(1))),
    Mnemonic::new("BRM", "BRC", &[(0, 4)], UNI.with(ESA).with(since_zs(1))),
    Mnemonic::new("BRML", "BRCL", &[(0, 4)], UNI.with(since_zs(1))),
    Mnemonic::new("BRNE", "BRC", &[(0, 7)], UNI.with(ESA).with(since_zs(1))),
    Mnemonic::new("BRNEL", "BRCL", &[(0, 7)], UNI.with(since_zs(1))),
    Mnemonic::new("BRNH", "BRC", &[(0, 13)], UNI.with(ESA).with(since_zs(1))),
    Mnemonic::new("BRNHL", "BRCL", &[(0, 13)], UNI.with(since_zs(1))),
    Mnemonic::new("BRNL", "BRC", &[(0, 11)], UNI.with(ESA).with(since_zs(1))),
    Mnemonic::new("BRNLL", "BRCL", &[(0, 11)], UNI.with(since_zs(1))),
    Mnemonic::new("BRNM", "BRC", &[(0, 11)], UNI.with(ESA).with(since_zs(1))),
    Mnemonic::new("BRNML", "BRCL", &[(0, 11)], UNI.with(since_zs(1))),
    Mnemonic::new("BRNO", "BRC", &[(0, 14)], UNI.with(ESA).with(since_zs(1))),
    Mnemonic::new("BRNOL", "BRCL", &[(0, 14)], UNI.with(since_zs(1))),
    Mnemonic::new("BRNP", "BRC", &[(0, 13)], UNI.with(ESA).with(since_zs(1))),
    Mnemonic::new("BRNPL", "BRCL", &[(0, 13)], UNI.with(since_zs(1))),
    Mnemonic::new("BRNZ", "BRC", &[(0, 7)], UNI.with(ESA).with(since_zs(1))),
    Mnemonic::new("BRNZL", "BRCL", &[(0, 7)], UNI.with(since_zs(1))),
    Mnemonic::new("BRO", "BRC", &[(0, 1)], UNI.with(ESA).with(since_zs(1))),
    Mnemonic::new("BROL", "BRCL", &[(0, 1)], UNI.with(since_zs(1))),
    Mnemonic::new("BRP", "BRC", &[(0, 2)], UNI.with(ESA).with(since_zs(1))),
    Mnemonic::new("BRPL", "BRCL", &[(0, 2)], UNI.with(since_zs(1))),
    Mnemonic::new("BRU", "BRC", &[(0, 15)], UNI.with(ESA).with(since_zs(1))),
    Mnemonic::new("BRUL", "BRCL", &[(0, 15)], UNI.with(since_zs(1))),
    Mnemonic::new("BRZ", "BRC", &[(0, 8)], UNI.with(ESA).with(since_zs(1))),
    Mnemonic::new("BRZL", "BRCL", &[(0, 8)], UNI.with(since_zs(1))),
    Mnemonic::new("BZ", "BC", &[(0, 8)], UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    Mnemonic::new("BZR", "BCR", &[(0, 8)], UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    Mnemonic::new("CGIBE", "CGIB", &[(2, 8)], UNI.with(since_zs(4))),
    Mnemonic::new("CGIBH", "CGIB", &[(2, 2)], UNI.with(since_zs(4))),
    Mnemonic::new("CGIBL", "CGIB", &[(2, 4)], UNI.with(since_zs(4))),
    Mnemonic::new("CGIBNE", "CGIB", &[(2, 6)], UNI.with(since_zs(4))),
    Mnemonic::new("CGIBNH", "CGIB", &[(2, 12)], UNI.with(since_zs(4))),
    Mnemonic::new("CGIBNL", "CGIB", &[(2, 10)], UNI.with(since_zs(4))),
    Mnemonic::new("CGIJE", "CGIJ", &[(2, 8)], UNI.with(since_zs(4))),
    Mnemonic::new("CGIJH", "CGIJ", &[(2, 2)], UNI.with(since_zs(4))),
    Mnemonic::new("CGIJL", "CGIJ", &[(2, 4)], UNI.with(since_zs(4))),
    Mnemonic::new("CGIJNE", "CGIJ", &[(2, 6)], UNI.with(since_zs(4))),
    Mnemonic::new("CGIJNH", "CGIJ", &[(2, 12)], UNI.with(since_zs(4))),
    Mnemonic::new("CGIJNL", "CGIJ", &[(2, 10)], UNI.with(since_zs(4))),
    Mnemonic::new("CGITE", "CGIT", &[(2, 8)], UNI.with(since_zs(4))),
    Mnemonic::new("CGITH", "CGIT", &[(2, 2)], UNI.with(since_zs(4))),
    Mnemonic::new("CGITL", "CGIT", &[(2, 4)], UNI.with(since_zs(4))),
    Mnemonic::new("CGITNE", "CGIT", &[(2, 6)], UNI.with(since_zs(4))),
    Mnemonic::new("CGITNH", "CGIT", &[(2, 12)], UNI.with(since_zs(4))),
    Mnemonic::new("CGITNL", "CGIT", &[(2, 10)], UNI.with(since_zs(4))),
    Mnemonic::new("CGRBE", "CGRB", &[(2, 8)], UNI.with(since_zs(4))),
    Mnemonic::new("CGRBH", "CGRB", &[(2, 2)], UNI.with(since_zs(4))),
    Mnemonic::new("CGRBL", "CGRB", &[(2, 4)], UNI.with(since_zs(4))),
    Mnemonic::new("CGRBNE", "CGRB", &[(2, 6)], UNI.with(since_zs(4))),
    Mnemonic::new("CGRBNH", "CGRB", &[(2, 12)], UNI.with(since_zs(4))),
    Mnemonic::new("CGRBNL", "CGRB", &[(2, 10)], UNI.with(since_zs(4))),
    Mnemonic::new("CGRJE", "CGRJ", &[(2, 8)], UNI.with(since_zs(4))),
    Mnemonic::new("CGRJH", "CGRJ", &[(2, 2)], UNI.with(since_zs(4))),
    Mnemonic::new("CGRJL", "CGRJ", &[(2, 4)], UNI.with(since_zs(4))),
    Mnemonic::new("CGRJNE", "CGRJ", &[(2, 6)], UNI.with(since_zs(4))),
    Mnemonic::new("CGRJNH", "CGRJ", &[(2, 12)], UNI.with(since_zs(4))),
    Mnemonic::new("CGRJNL", "CGRJ", &[(2, 10)], UNI.with(since_zs(4))),
    Mnemonic::new("CGRTE", "CGRT", &[(2, 8)], UNI.with(since_zs(4))),
    Mnemonic::new("CGRTH", "CGRT", &[(2, 2)], UNI.with(since_zs(4))),
    Mnemonic::new("CGRTL", "CGRT", &[(2, 4)], UNI.with(since_zs(4))),
    Mnemonic::new("CGRTNE", "CGRT", &[(2, 6)], UNI.with(since_zs(4))),
    Mnemonic::new("CGRTNH", "CGRT", &[(2, 12)], UNI.with(since_zs(4))),
    Mnemonic::new("CGRTNL", "CGRT", &[(2, 10)], UNI.with(since_zs(4))),
    Mnemonic::new("CIBE", "CIB", &[(2, 8)], UNI.with(since_zs(4))),
    Mnemonic::new("CIBH", "CIB", &[(2, 2)], UNI.with(since_zs(4))),
    Mnemonic::new("CIBL", "CIB", &[(2, 4)], UNI.with(since_zs(4))),
    Mnemonic::new("CIBNE", "CIB", &[(2, 6)], UNI.with(since_zs(4))),
    Mnemonic::new("CIBNH", "CIB", &[(2, 12)], UNI.with(since_zs(4))),
    Mnemonic::new("CIBNL", "CIB", &[(2, 10)], UNI.with(since_zs(4))),
    Mnemonic::new("CIJE", "CIJ", &[(2, 8)], UNI.with(since_zs(4))),
    Mnemonic::new("CIJH", "CIJ", &[(2, 2)], UNI.with(since_zs(4))),
    Mnemonic::new("CIJL", "CIJ", &[(2, 4)], UNI.with(since_zs(4))),
    Mnemonic::new("CIJNE", "CIJ", &[(2, 6)], UNI.with(since_zs(4))),
    Mnemonic::new("CIJNH", "CIJ", &[(2, 12)], UNI.with(since_zs(4))),
    Mnemonic::new("CIJNL", "CIJ", &[(2, 10)], UNI.with(since_zs(4))),
    Mnemonic::new("CITE", "CIT", &[(2, 8)], UNI.with(since_zs(4))),
    Mnemonic::new("CITH", "CIT", &[(2, 2)], UNI.with(since_zs(4))),
    Mnemonic::new("CITL", "CIT", &[(2, 4)], UNI.with(since_zs(4))),
    Mnemonic::new("CITNE", "CIT", &[(2, 6)], UNI.with(since_zs(4))),
    Mnemonic::new("CITNH", "CIT", &[(2, 12)], UNI.with(since_zs(4))),
    Mnemonic::new("CITNL", "CIT", &[(2, 10)], UNI.with(since_zs(4))),
    Mnemonic::new("CLFITE", "CLFIT", &[(2, 8)], UNI.with(since_zs(4))),
    Mnemonic::new("CLFITH", "CLFIT", &[(2, 2)], UNI.with(since_zs(4))),
    Mnemonic::new("CLFITL", "CLFIT", &[(2, 4)], UNI.with(since_zs(4))),
    Mnemonic::new("CLFITNE", "CLFIT", &[(2, 6)], UNI.with(since_zs(4))),
    Mnemonic::new("CLFITNH", "CLFIT", &[(2, 12)], UNI.with(since_zs(4))),
    Mnemonic::new("CLFITNL", "CLFIT", &[(2, 10)], UNI.with(since_zs(4))),
    Mnemonic::new("CLGIBE", "CLGIB", &[(2, 8)], UNI.with(since_zs(4))),
    Mnemonic::new("CLGIBH", "CLGIB", &[(2, 2)], UNI.with(since_zs(4))),
    Mnemonic::new("CLGIBL", "CLGIB", &[(2, 4)], UNI.with(since_zs(4))),
    Mnemonic::new("CLGIBNE", "CLGIB", &[(2, 6)], UNI.with(since_zs(4))),
    Mnemonic::new("CLGIBNH", "CLGIB", &[(2, 12)], UNI.with(since_zs(4))),
    Mnemonic::new("CLGIBNL", "CLGIB", &[(2, 10)], UNI.with(since_zs(4))),
    Mnemonic::new("CLGIJE", "CLGIJ", &[(2, 8)], UNI.with(since_zs(4))),
    Mnemonic::new("CLGIJH", "CLGIJ", &[(2, 2)], UNI.with(since_zs(4))),
    Mnemonic::new("CLGIJL", "CLGIJ", &[(2, 4)], UNI.with(since_zs(4))),
    Mnemonic::new("CLGIJNE", "CLGIJ", &[(2, 6)], UNI.with(since_zs(4))),
    Mnemonic::new("CLGIJNH", "CLGIJ", &[(2, 12)], UNI.with(since_zs(4))),
    Mnemonic::new("CLGIJNL", "CLGIJ", &[(2, 10)], UNI.with(since_zs(4))),
    Mnemonic::new("CLGITE", "CLGIT", &[(2, 8)], UNI.with(since_zs(4))),
    Mnemonic::new("CLGITH", "CLGIT", &[(2, 2)], UNI.with(since_zs(4))),
    Mnemonic::new("CLGITL", "CLGIT", &[(2, 4)], UNI.with(since_zs(4))),
    Mnemonic::new("CLGITNE", "CLGIT", &[(2, 6)], UNI.with(since_zs(4))),
    Mnemonic::new("CLGITNH", "CLGIT", &[(2, 12)], UNI.with(since_zs(4))),
    Mnemonic::new("CLGITNL", "CLGIT", &[(2, 10)], UNI.with(since_zs(4))),
    Mnemonic::new("CLGRBE", "CLGRB", &[(2, 8)], UNI.with(since_zs(4))),
    Mnemonic::new("CLGRBH", "CLGRB", &[(2, 2)], UNI.with(since_zs(4))),
    Mnemonic::new("CLGRBL", "CLGRB", &[(2, 4)], UNI.with(since_zs(4))),
    Mnemonic::new("CLGRBNE", "CLGRB", &[(2, 6)], UNI.with(since_zs(4))),
    Mnemonic::new("CLGRBNH", "CLGRB", &[(2, 12)], UNI.with(since_zs(4))),
    Mnemonic::new("CLGRBNL", "CLGRB", &[(2, 10)], UNI.with(since_zs(4))),
    Mnemonic::new("CLGRJE", "CLGRJ", &[(2, 8)], UNI.with(since_zs(4))),
    Mnemonic::new("CLGRJH", "CLGRJ", &[(2, 2)], UNI.with(since_zs(4))),
    Mnemonic::new("CLGRJL", "CLGRJ", &[(2, 4)], UNI.with(since_zs(4))),
    Mnemonic::new("CLGRJNE", "CLGRJ", &[(2, 6)], UNI.with(since_zs(4))),
    Mnemonic::new("CLGRJNH", "CLGRJ", &[(2, 12)], UNI.with(since_zs(4))),
    Mnemonic::new("CLGRJNL", "CLGRJ", &[(2, 10)], UNI.with(since_zs(4))),
    Mnemonic::new("CLGRTE", "CLGRT", &[(2, 8)], UNI.with(since_zs(4))),
    Mnemonic::new("CLGRTH", "CLGRT", &[(2, 2)], UNI.with(since_zs(4))),
    Mnemonic::new("CLGRTL", "CLGRT", &[(2, 4)], UNI.with(since_zs(4))),
    Mnemonic::new("CLGRTNE", "CLGRT", &[(2, 6)], UNI.with(since_zs(4))),
    Mnemonic::new("CLGRTNH", "CLGRT", &[(2, 12)], UNI.with(since_zs(4))),
    Mnemonic::new("CLGRTNL", "CLGRT", &[(2, 10)], UNI.with(since_zs(4))),
    Mnemonic::new("CLGTE", "CLGT", &[(1, 8)], UNI.with(since_zs(6))),
    Mnemonic::new("CLGTH", "CLGT", &[(1, 2)], UNI.with(since_zs(6))),
    Mnemonic::new("CLGTL", "CLGT", &[(1, 4)], UNI.with(since_zs(6))),
    Mnemonic::new("CLGTNE", "CLGT", &[(1, 6)], UNI.with(since_zs(6))),
    Mnemonic::new("CLGTNH", "CLGT", &[(1, 12)], UNI.with(since_zs(6))),
    Mnemonic::new("CLGTNL", "CLGT", &[(1, 10)], UNI.with(since_zs(6))),
    Mnemonic::new("CLIBE", "CLIB", &[(2, 8)], UNI.with(since_zs(4))),
    Mnemonic::new("CLIBH", "CLIB", &[(2, 2)], UNI.with(since_zs(4))),
    Mnemonic::new("CLIBL", "CLIB", &[(2, 4)], UNI.with(since_zs(4))),
    Mnemonic::new("CLIBNE", "CLIB", &[(2, 6)], UNI.with(since_zs(4))),
    Mnemonic::new("CLIBNH", "CLIB", &[(2, 12)], UNI.with(since_zs(4))),
    Mnemonic::new("CLIBNL", "CLIB", &[(2, 10)], UNI.with(since_zs(4))),
    Mnemonic::new("CLIJE", "CLIJ", &[(2, 8)], UNI.with(since_zs(4))),
    Mnemonic::new("CLIJH", "CLIJ", &[(2, 2)], UNI.with(since_zs(4))),
    Mnemonic::new("CLIJL", "CLIJ", &[(2, 4)], UNI.with(since_zs(4))),
    Mnemonic::new("CLIJNE", "CLIJ", &[(2, 6)], UNI.with(since_zs(4))),
    Mnemonic::new("CLIJNH", "CLIJ", &[(2, 12)], UNI.with(since_zs(4))),
    Mnemonic::new("CLIJNL", "CLIJ", &[(2, 10)], UNI.with(since_zs(4))),
    Mnemonic::new("CLRBE", "CLRB", &[(2, 8)], UNI.with(since_zs(4))),
    Mnemonic::new("CLRBH", "CLRB", &[(2, 2)], UNI.with(since_zs(4))),
    Mnemonic::new("CLRBL", "CLRB", &[(2, 4)], UNI.with(since_zs(4))),
    Mnemonic::new("CLRBNE", "CLRB", &[(2, 6)], UNI.with(since_zs(4))),
    Mnemonic::new("CLRBNH", "CLRB", &[(2, 12)], UNI.with(since_zs(4))),
    Mnemonic::new("CLRBNL", "CLRB", &[(2, 10)], UNI.with(since_zs(4))),
    Mnemonic::new("CLRJE", "CLRJ", &[(2, 8)], UNI.with(since_zs(4))),
    Mnemonic::new("CLRJH", "CLRJ", &[(2, 2)], UNI.with(since_zs(4))),
    Mnemonic::new("CLRJL", "CLRJ", &[(2, 4)], UNI.with(since_zs(4))),
    Mnemonic::new("CLRJNE", "CLRJ", &[(2, 6)], UNI.with(since_zs(4))),
    Mnemonic::new("CLRJNH", "CLRJ", &[(2, 12)], UNI.with(since_zs(4))),
    Mnemonic::new("CLRJNL", "CLRJ", &[(2, 10)], UNI.with(since_zs(4))),
    Mnemonic::new("CLRTE", "CLRT", &[(2, 8)], UNI.with(since_zs(4))),
    Mnemonic::new("CLRTH", "CLRT", &[(2, 2)], UNI.with(since_zs(4))),
    Mnemonic::new("CLRTL", "CLRT", &[(2, 4)], UNI.with(since_zs(4))),
    Mnemonic::new("CLRTNE", "CLRT", &[(2, 6)], UNI.with(since_zs(4))),
    Mnemonic::new("CLRTNH", "CLRT", &[(2, 12)], UNI.with(since_zs(4))),
    Mnemonic::new("CLRTNL", "CLRT", &[(2, 10)], UNI.with(since_zs(4))),
    Mnemonic::new("CLTE", "CLT", &[(1, 8)], UNI.with(since_zs(6))),
    Mnemonic::new("CLTH", "CLT", &[(1, 2)], UNI.with(since_zs(6))),
    Mnemonic::new("CLTL", "CLT", &[(1, 4)], UNI.with(since_zs(6))),
    Mnemonic::new("CLTNE", "CLT", &[(1, 6)], UNI.with(since_zs(6))),
    Mnemonic::new("CLTNH", "CLT", &[(1, 12)], UNI.with(since_zs(6))),
    Mnemonic::new("CLTNL", "CLT", &[(1, 10)], UNI.with(since_zs(6))),
    Mnemonic::new("CRBE", "CRB", &[(2, 8)], UNI.with(since_zs(4))),
    Mnemonic::new("CRBH", "CRB", &[(2, 2)], UNI.with(since_zs(4))),
    Mnemonic::new("CRBL", "CRB", &[(2, 4)], UNI.with(since_zs(4))),
    Mnemonic::new("CRBNE", "CRB", &[(2, 6)], UNI.with(since_zs(4))),
    Mnemonic::new("CRBNH", "CRB", &[(2, 12)], UNI.with(since_zs(4))),
    Mnemonic::new("CRBNL", "CRB", &[(2, 10)], UNI.with(since_zs(4))),
    Mnemonic::new("CRJE", "CRJ", &[(2, 8)], UNI.with(since_zs(4))),
    Mnemonic::new("CRJH", "CRJ", &[(2, 2)], UNI.with(since_zs(4))),
    Mnemonic::new("CRJL", "CRJ", &[(2, 4)], UNI.with(since_zs(4))),
    Mnemonic::new("CRJNE", "CRJ", &[(2, 6)], UNI.with(since_zs(4))),
    Mnemonic::new("CRJNH", "CRJ", &[(2, 12)], UNI.with(since_zs(4))),
    Mnemonic::new("CRJNL", "CRJ", &[(2, 10)], UNI.with(since_zs(4))),
    Mnemonic::new("CRTE", "CRT", &[(2, 8)], UNI.with(since_zs(4))),
    Mnemonic::new("CRTH", "CRT", &[(2, 2)], UNI.with(since_zs(4))),
    Mnemonic::new("CRTL", "CRT", &[(2, 4)], UNI.with(since_zs(4))),
    Mnemonic::new("CRTNE", "CRT", &[(2, 6)], UNI.with(since_zs(4))),
    Mnemonic::new("CRTNH", "CRT", &[(2, 12)], UNI.with(since_zs(4))),
    Mnemonic::new("CRTNL", "CRT", &[(2, 10)], UNI.with(since_zs(4))),
    Mnemonic::new("J", "BRC", &[(0, 15)], UNI.with(ESA).with(since_zs(1))),
    Mnemonic::new("JAS", "BRAS", &[], UNI.with(ESA).with(since_zs(1))),
    Mnemonic::new("JASL", "BRASL", &[], UNI.with(ESA).with(since_zs(1))),
    Mnemonic::new("JC", "BRC", &[], UNI.with(ESA).with(since_zs(1))),
    Mnemonic::new("JCT", "BRCT", &[], UNI.with(ESA).with(since_zs(1))),
    Mnemonic::new("JCTG", "BRCTG", &[], UNI.with(since_zs(1))),
    Mnemonic::new("JE", "BRC", &[(0, 8)], UNI.with(ESA).with(since_zs(1))),
    Mnemonic::new("JH", "BRC", &[(0, 2)], UNI.with(ESA).with(since_zs(1))),
    Mnemonic::new("JL", "BRC", &[(0, 4)], UNI.with(ESA).with(since_zs(1))),
    Mnemonic::new("JLE", "BRCL", &[(0, 8)], UNI.with(since_zs(1))),
    Mnemonic::new("JLH", "BRCL", &[(0, 2)], UNI.with(since_zs(1))),
    Mnemonic::new("JLL", "BRCL", &[(0, 4)], UNI.with(since_zs(1))),
    Mnemonic::new("JLM", "BRCL", &[(0, 4)], UNI.with(since_zs(1))),
    Mnemonic::new("JLNE", "BRCL", &[(0, 7)], UNI.with(since_zs(1))),
    Mnemonic::new("JLNH", "BRCL", &[(0, 13)], UNI.with(since_zs(1))),
    Mnemonic::new("JLNL", "BRCL", &[(0, 11)], UNI.with(since_zs(1))),
    Mnemonic::new("JLNM", "BRCL", &[(0, 11)], UNI.with(since_zs(1))),
    Mnemonic::new("JLNO", "BRCL", &[(0, 14)], UNI.with(since_zs(1))),
    Mnemonic::new("JLNOP", "BRCL", &[(0, 0)], UNI.with(ESA).with(since_zs(1))),
    Mnemonic::new("JLNP", "BRCL", &[(0, 13)], UNI.with(since_zs(1))),
    Mnemonic::new("JLNZ", "BRCL", &[(0, 7)], UNI.with(since_zs(1))),
    Mnemonic::new("JLO", "BRCL", &[(0, 1)], UNI.with(since_zs(1))),
    Mnemonic::new("JLP", "BRCL", &[(0, 2)], UNI.with(since_zs(1))),
    Mnemonic::new("JLU", "BRCL", &[(0, 15)], UNI.with(since_zs(1))),
    Mnemonic::new("JLZ", "BRCL", &[(0, 8)], UNI.with(since_zs(1))),
    Mnemonic::new("JM", "BRC", &[(0, 4)], UNI.with(ESA).with(since_zs(1))),
    Mnemonic::new("JNE", "BRC", &[(0, 7)], UNI.with(ESA).with(since_zs(1))),
    Mnemonic::new("JNH", "BRC", &[(0, 13)], UNI.with(ESA).with(since_zs(1))),
    Mnemonic::new("JNL", "BRC", &[(0, 11)], UNI.with(ESA).with(since_zs(1))),
    Mnemonic::new("JNM", "BRC", &[(0, 11)], UNI.with(ESA).with(since_zs(1))),
    Mnemonic::new("JNO", "BRC", &[(0, 14)], UNI.with(ESA).with(since_zs(1))),
    Mnemonic::new("JNOP", "BRC", &[(0, 0)], UNI.with(ESA).with(since_zs(1))),
    Mnemonic::new("JNP", "BRC", &[(0, 13)], UNI.with(ESA).with(since_zs(1))),
    Mnemonic::new("JNZ", "BRC", &[(0, 7)], UNI.with(ESA).with(since_zs(1))),
    Mnemonic::new("JO", "BRC", &[(0, 1)], UNI.with(ESA).with(since_zs(1))),
    Mnemonic::new("JP", "BRC", &[(0, 2)], UNI.with(ESA).with(since_zs(1))),
    Mnemonic::new("JXH", "BRXH", &[], UNI.with(ESA).with(since_zs(1))),
    Mnemonic::new("JXHG", "BRXHG", &[], UNI.with(since_zs(1))),
    Mnemonic::new("JXLE", "BRXLE", &[], UNI.with(ESA).with(since_zs(1))),
    Mnemonic::new("JXLEG", "BRXLG", &[], UNI.with(since_zs(1))),
    Mnemonic::new("JZ", "BRC", &[(0, 8)], UNI.with(ESA).with(since_zs(1))),
    Mnemonic::new("LDRV", "VLLEBRZ", &[(2, 3)], UNI.with(since_zs(9))),
    Mnemonic::new("LERV", "VLLEBRZ", &[(2, 6)], UNI.with(since_zs(9))),
    Mnemonic::new("LHHR", "RISBHGZ", &[(2, 0), (3, 31)], UNI.with(since_zs(5))),
    Mnemonic::new("LHLR", "RISBHGZ", &[(2, 0), (3, 31), (4, 32)], UNI.with(since_zs(5))),
    Mnemonic::new("LLCHHR", "RISBHGZ", &[(2, 24), (3, 31)], UNI.with(since_zs(5))),
    Mnemonic::new("LLCHLR", "RISBHGZ", &[(2, 24), (3, 31), (4, 32)], UNI.with(since_zs(5))),
    Mnemonic::new("LLCLHR", "RISBLGZ", &[(2, 24), (3, 31), (4, 32)], UNI.with(since_zs(5))),
    Mnemonic::new("LLHFR", "RISBLGZ", &[(2, 0), (3, 31), (4, 32)], UNI.with(since_zs(5))),
    Mnemonic::new("LLHHHR", "RISBHGZ", &[(2, 16), (3, 31)], UNI.with(since_zs(5))),
    Mnemonic::new("LLHHLR", "RISBHGZ", &[(2, 16), (3, 31), (4, 32)], UNI.with(since_zs(5))),
    Mnemonic::new("LLHLHR", "RISBLGZ", &[(2, 16), (3, 31), (4, 32)], UNI.with(since_zs(5))),
    Mnemonic::new("LOCE", "LOC", &[(2, 8)], UNI.with(since_zs(5))),
    Mnemonic::new("LOCFHE", "LOCFH", &[(2, 8)], UNI.with(since_zs(7))),
    Mnemonic::new("LOCFHH", "LOCFH", &[(2, 2)], UNI.with(since_zs(7))),
    Mnemonic::new("LOCFHL", "LOCFH", &[(2, 4)], UNI.with(since_zs(7))),
    Mnemonic::new("LOCFHNE", "LOCFH", &[(2, 7)], UNI.with(since_zs(7))),
    Mnemonic::new("LOCFHNH", "LOCFH", &[(2, 13)], UNI.with(since_zs(7))),
    Mnemonic::new("LOCFHNL", "LOCFH", &[(2, 11)], UNI.with(since_zs(7))),
    Mnemonic::new("LOCFHNO", "LOCFH", &[(2, 14)], UNI.with(since_zs(7))),
    Mnemonic::new("LOCFHO", "LOCFH", &[(2, 1)], UNI.with(since_zs(7))),
    Mnemonic::new("LOCFHRE", "LOCFHR", &[(2, 8)], UNI.with(since_zs(7))),
    Mnemonic::new("LOCFHRH", "LOCFHR", &[(2, 2)], UNI.with(since_zs(7))),
    Mnemonic::new("LOCFHRL", "LOCFHR", &[(2, 4)], UNI.with(since_zs(7))),
    Mnemonic::new("LOCFHRNE", "LOCFHR", &[(2, 7)], UNI.with(since_zs(7))),
    Mnemonic::new("LOCFHRNH", "LOCFHR", &[(2, 13)], UNI.with(since_zs(7))),
    Mnemonic::new("LOCFHRNL", "LOCFHR", &[(2, 11)], UNI.with(since_zs(7))),
    Mnemonic::new("LOCFHRNO", "LOCFHR", &[(2, 14)], UNI.with(since_zs(7))),
    Mnemonic::new("LOCFHRO", "LOCFHR", &[(2, 1)], UNI.with(since_zs(7))),
    Mnemonic::new("LOCGE", "LOCG", &[(2, 8)], UNI.with(since_zs(5))),
    Mnemonic::new("LOCGH", "LOCG", &[(2, 2)], UNI.with(since_zs(5))),
    Mnemonic::new("LOCGHIE", "LOCGHI", &[(2, 8)], UNI.with(since_zs(7))),
    Mnemonic::new("LOCGHIH", "LOCGHI", &[(2, 2)], UNI.with(since_zs(7))),
    Mnemonic::new("LOCGHIL", "LOCGHI", &[(2, 4)], UNI.with(since_zs(7))),
    Mnemonic::new("LOCGHINE", "LOCGHI", &[(2, 7)], UNI.with(since_zs(7))),
    Mnemonic::new("LOCGHINH", "LOCGHI", &[(2, 13)], UNI.with(since_zs(7))),
    Mnemonic::new("LOCGHINL", "LOCGHI", &[(2, 11)], UNI.with(since_zs(7))),
    Mnemonic::new("LOCGHINO", "LOCGHI", &[(2, 14)], UNI.with(since_zs(7))),
    Mnemonic::new("LOCGHIO", "LOCGHI", &[(2, 1)], UNI.with(since_zs(7))),
    Mnemonic::new("LOCGL", "LOCG", &[(2, 4)], UNI.with(since_zs(5))),
    Mnemonic::new("LOCGNE", "LOCG", &[(2, 6)], UNI.with(since_zs(5))),
    Mnemonic::new("LOCGNH", "LOCG", &[(2, 12)], UNI.with(since_zs(5))),
    Mnemonic::new("LOCGNL", "LOCG", &[(2, 10)], UNI.with(since_zs(5))),
    Mnemonic::new("LOCGNO", "LOCG", &[(2, 14)], UNI.with(since_zs(7))),
    Mnemonic::new("LOCGO", "LOCG", &[(2, 1)], UNI.with(since_zs(7))),
    Mnemonic::new("LOCGRE", "LOCGR", &[(2, 8)], UNI.with(since_zs(5))),
    Mnemonic::new("LOCGRH", "LOCGR", &[(2, 2)], UNI.with(since_zs(5))),
    Mnemonic::new("LOCGRL", "LOCGR", &[(2, 4)], UNI.with(since_zs(5))),
    Mnemonic::new("LOCGRNE", "LOCGR", &[(2, 6)], UNI.with(since_zs(5))),
    Mnemonic::new("LOCGRNH", "LOCGR", &[(2, 12)], UNI.with(since_zs(5))),
    Mnemonic::new("LOCGRNL", "LOCGR", &[(2, 10)], UNI.with(since_zs(5))),
    Mnemonic::new("LOCGRNO", "LOCGR", &[(2, 14)], UNI.with(since_zs(7))),
    Mnemonic::new("LOCGRO", "LOCGR", &[(2, 1)], UNI.with(since_zs(7))),
    Mnemonic::new("LOCH", "LOC", &[(2, 2)], UNI.with(since_zs(5))),
    Mnemonic::new("LOCHHIE", "LOCHHI", &[(2, 8)], UNI.with(since_zs(7))),
    Mnemonic::new("LOCHHIH", "LOCHHI", &[(2, 2)], UNI.with(since_zs(7))),
    Mnemonic::new("LOCHHIL", "LOCHHI", &[(2, 4)], UNI.with(since_zs(7))),
    Mnemonic::new("LOCHHINE", "LOCHHI", &[(2, 7)], UNI.with(since_zs(7))),
    Mnemonic::new("LOCHHINH", "LOCHHI", &[(2, 13)], UNI.with(since_zs(7))),
    Mnemonic::new("LOCHHINL", "LOCHHI", &[(2, 11)], UNI.with(since_zs(7))),
    Mnemonic::new("LOCHHINO", "LOCHHI", &[(2, 14)], UNI.with(since_zs(7))),
    Mnemonic::new("LOCHHIO", "LOCHHI", &[(2, 1)], UNI.with(since_zs(7))),
    Mnemonic::new("LOCHIE", "LOCHI", &[(2, 8)], UNI.with(since_zs(7))),
    Mnemonic::new("LOCHIH", "LOCHI", &[(2, 2)], UNI.with(since_zs(7))),
    Mnemonic::new("LOCHIL", "LOCHI", &[(2, 4)], UNI.with(since_zs(7))),
    Mnemonic::new("LOCHINE", "LOCHI", &[(2, 7)], UNI.with(since_zs(7))),
    Mnemonic::new("LOCHINH", "LOCHI", &[(2, 13)], UNI.with(since_zs(7))),
    Mnemonic::new("LOCHINL", "LOCHI", &[(2, 11)], UNI.with(since_zs(7))),
    Mnemonic::new("LOCHINO", "LOCHI", &[(2, 14)], UNI.with(since_zs(7))),
    Mnemonic::new("LOCHIO", "LOCHI", &[(2, 1)], UNI.with(since_zs(7))),
    Mnemonic::new("LOCL", "LOC", &[(2, 4)], UNI.with(since_zs(5))),
    Mnemonic::new("LOCNE", "LOC", &[(2, 6)], UNI.with(since_zs(5))),
    Mnemonic::new("LOCNH", "LOC", &[(2, 12)], UNI.with(since_zs(5))),
    Mnemonic::new("LOCNL", "LOC", &[(2, 10)], UNI.with(since_zs(5))),
    Mnemonic::new("LOCNO", "LOC", &[(2, 14)], UNI.with(since_zs(7))),
    Mnemonic::new("LOCO", "LOC", &[(2, 1)], UNI.with(since_zs(7))),
    Mnemonic::new("LOCRE", "LOCR", &[(2, 8)], UNI.with(since_zs(5))),
    Mnemonic::new("LOCRH", "LOCR", &[(2, 2)], UNI.with(since_zs(5))),
    Mnemonic::new("LOCRL", "LOCR", &[(2, 4)], UNI.with(since_zs(5))),
    Mnemonic::new("LOCRNE", "LOCR", &[(2, 6)], UNI.with(since_zs(5))),
    Mnemonic::new("LOCRNH", "LOCR", &[(2, 12)], UNI.with(since_zs(5))),
    Mnemonic::new("LOCRNL", "LOCR", &[(2, 10)], UNI.with(since_zs(5))),
    Mnemonic::new("LOCRNO", "LOCR", &[(2, 14)], UNI.with(since_zs(7))),
    Mnemonic::new("LOCRO", "LOCR", &[(2, 1)], UNI.with(since_zs(7))),
    Mnemonic::new("NHHR", "RNSBG", &[(2, 0), (3, 31)], UNI.with(since_zs(5))),
    Mnemonic::new("NHLR", "RNSBG", &[(2, 0), (3, 31), (4, 32)], UNI.with(since_zs(5))),
    Mnemonic::new("NLHR", "RNSBG", &[(2, 32), (3, 63), (4, 32)], UNI.with(since_zs(5))),
    Mnemonic::new("NOP", "BC", &[(0, 0)], UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    Mnemonic::new("NOPR", "BCR", &[(0, 0)], UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    Mnemonic::new("NOTGR", "NOGRK", &[(2, 0)], UNI.with(since_zs(9))),
    Mnemonic::new("NOTR", "NORK", &[(2, 0)], UNI.with(since_zs(9))),
    Mnemonic::new("OHHR", "ROSBG", &[(2, 0), (3, 31)], UNI.with(since_zs(5))),
    Mnemonic::new("OHLR", "ROSBG", &[(2, 0), (3, 31), (4, 32)], UNI.with(since_zs(5))),
    Mnemonic::new("OLHR", "ROSBG", &[(2, 32), (3, 63), (4, 32)], UNI.with(since_zs(5))),
    Mnemonic::new("SELFHRE", "SELFHR", &[(3, 8)], UNI.with(since_zs(9))),
    Mnemonic::new("SELFHRH", "SELFHR", &[(3, 2)], UNI.with(since_zs(9))),
    Mnemonic::new("SELFHRL", "SELFHR", &[(3, 4)], UNI.with(since_zs(9))),
    Mnemonic::new("SELFHRNE", "SELFHR", &[(3, 7)], UNI.with(since_zs(9))),
    Mnemonic::new("SELFHRNH", "SELFHR", &[(3, 13)], UNI.with(since_zs(9))),
    Mnemonic::new("SELFHRNL", "SELFHR", &[(3, 11)], UNI.with(since_zs(9))),
    Mnemonic::new("SELFHRNO", "SELFHR", &[(3, 14)], UNI.with(since_zs(9))),
    Mnemonic::new("SELFHRO", "SELFHR", &[(3, 1)], UNI.with(since_zs(9))),
    Mnemonic::new("SELGRE", "SELGR", &[(3, 8)], UNI.with(since_zs(9))),
    Mnemonic::new("SELGRH", "SELGR", &[(3, 2)], UNI.with(since_zs(9))),
    Mnemonic::new("SELGRL", "SELGR", &[(3, 4)], UNI.with(since_zs(9))),
    Mnemonic::new("SELGRNE", "SELGR", &[(3, 7)], UNI.with(since_zs(9))),
    Mnemonic::new("SELGRNH", "SELGR", &[(3, 13)], UNI.with(since_zs(9))),
    Mnemonic::new("SELGRNL", "SELGR", &[(3, 11)], UNI.with(since_zs(9))),
    Mnemonic::new("SELGRNO", "SELGR", &[(3, 14)], UNI.with(since_zs(9))),
    Mnemonic::new("SELGRO", "SELGR", &[(3, 1)], UNI.with(since_zs(9))),
    Mnemonic::new("SELRE", "SELR", &[(3, 8)], UNI.with(since_zs(9))),
    Mnemonic::new("SELRH", "SELR", &[(3, 2)], UNI.with(since_zs(9))),
    Mnemonic::new("SELRL", "SELR", &[(3, 4)], UNI.with(since_zs(9))),
    Mnemonic::new("SELRNE", "SELR", &[(3, 7)], UNI.with(since_zs(9))),
    Mnemonic::new("SELRNH", "SELR", &[(3, 13)], UNI.with(since_zs(9))),
    Mnemonic::new("SELRNL", "SELR", &[(3, 11)], UNI.with(since_zs(9))),
    Mnemonic::new("SELRNO", "SELR", &[(3, 14)], UNI.with(since_zs(9))),
    Mnemonic::new("SELRO", "SELR", &[(3, 1)], UNI.with(since_zs(9))),
    Mnemonic::new("STDRV", "VSTEBRG", &[(2, 0)], UNI.with(since_zs(9))),
    Mnemonic::new("STERV", "VSTEBRF", &[(2, 0)], UNI.with(since_zs(9))),
    Mnemonic::new("STOCE", "STOC", &[(2, 8)], UNI.with(since_zs(5))),
    Mnemonic::new("STOCFHE", "STOCFH", &[(2, 8)], UNI.with(since_zs(7))),
    Mnemonic::new("STOCFHH", "STOCFH", &[(2, 2)], UNI.with(since_zs(7))),
    Mnemonic::new("STOCFHL", "STOCFH", &[(2, 4)], UNI.with(since_zs(7))),
    Mnemonic::new("STOCFHNE", "STOCFH", &[(2, 7)], UNI.with(since_zs(7))),
    Mnemonic::new("STOCFHNH", "STOCFH", &[(2, 13)], UNI.with(since_zs(7))),
    Mnemonic::new("STOCFHNL", "STOCFH", &[(2, 11)], UNI.with(since_zs(7))),
    Mnemonic::new("STOCFHNO", "STOCFH", &[(2, 14)], UNI.with(since_zs(7))),
    Mnemonic::new("STOCFHO", "STOCFH", &[(2, 1)], UNI.with(since_zs(7))),
    Mnemonic::new("STOCGE", "STOCG", &[(2, 8)], UNI.with(since_zs(5))),
    Mnemonic::new("STOCGH", "STOCG", &[(2, 2)], UNI.with(since_zs(5))),
    Mnemonic::new("STOCGL", "STOCG", &[(2, 4)], UNI.with(since_zs(5))),
    Mnemonic::new("STOCGNE", "STOCG", &[(2, 6)], UNI.with(since_zs(5))),
    Mnemonic::new("STOCGNH", "STOCG", &[(2, 12)], UNI.with(since_zs(5))),
    Mnemonic::new("STOCGNL", "STOCG", &[(2, 10)], UNI.with(since_zs(5))),
    Mnemonic::new("STOCGNO", "STOCG", &[(2, 14)], UNI.with(since_zs(7))),
    Mnemonic::new("STOCGO", "STOCG", &[(2, 1)], UNI.with(since_zs(7))),
    Mnemonic::new("STOCH", "STOC", &[(2, 2)], UNI.with(since_zs(5))),
    Mnemonic::new("STOCL", "STOC", &[(2, 4)], UNI.with(since_zs(5))),
    Mnemonic::new("STOCNE", "STOC", &[(2, 6)], UNI.with(since_zs(5))),
    Mnemonic::new("STOCNH", "STOC", &[(2, 12)], UNI.with(since_zs(5))),
    Mnemonic::new("STOCNL", "STOC", &[(2, 10)], UNI.with(since_zs(5))),
    Mnemonic::new("STOCNO", "STOC", &[(2, 14)], UNI.with(since_zs(7))),
    Mnemonic::new("STOCO", "STOC", &[(2, 1)], UNI.with(since_zs(7))),
    Mnemonic::new("VAB", "VA", &[(3, 0)], UNI.with(since_zs(7))),
    Mnemonic::new("VACCB", "VACC", &[(3, 0)], UNI.with(since_zs(7))),
    Mnemonic::new("VACCCQ", "VACCC", &[(3, 4)], UNI.with(since_zs(7))),
    Mnemonic::new("VACCF", "VACC", &[(3, 2)], UNI.with(since_zs(7))),
    Mnemonic::new("VACCG", "VACC", &[(3, 3)], UNI.with(since_zs(7))),
    Mnemonic::new("VACCH", "VACC", &[(3, 1)], UNI.with(since_zs(7))),
    Mnemonic::new("VACCQ", "VACC", &[(3, 4)], UNI.with(since_zs(7))),
    Mnemonic::new("VACQ", "VAC", &[(3, 4)], UNI.with(since_zs(7))),
    Mnemonic::new("VAF", "VA", &[(3, 2)], UNI.with(since_zs(7))),
    Mnemonic::new("VAG", "VA", &[(3, 3)], UNI.with(since_zs(7))),
    Mnemonic::new("VAH", "VA", &[(3, 1)], UNI.with(since_zs(7))),
    Mnemonic::new("VAQ", "VA", &[(3, 4)], UNI.with(ESA).with(XA).with(_370).with(since_zs(7))),
    Mnemonic::new("VAVGB", "VAVG", &[(3, 0)], UNI.with(since_zs(7))),
    Mnemonic::new("VAVGF", "VAVG", &[(3, 2)], UNI.with(since_zs(7))),
    Mnemonic::new("VAVGG", "VAVG", &[(3, 3)], UNI.with(since_zs(7))),
    Mnemonic::new("VAVGH", "VAVG", &[(3, 1)], UNI.with(since_zs(7))),
    Mnemonic::new("VAVGLB", "VAVGL", &[(3, 0)], UNI.with(since_zs(7))),
    Mnemonic::new("VAVGLF", "VAVGL", &[(3, 2)], UNI.with(since_zs(7))),
    Mnemonic::new("VAVGLG", "VAVGL", &[(3, 3)], UNI.with(since_zs(7))),
    Mnemonic::new("VAVGLH", "VAVGL", &[(3, 1)], UNI.with(since_zs(7))),
    Mnemonic::new("VCDG", "VCFPS", &[], UNI.with(since_zs(7))),
    Mnemonic::new("VCDGB", "VCFPS", &[(2, 3)], UNI.with(since_zs(7))),
    Mnemonic::new("VCDLG", "VCFPL", &[], UNI.with(since_zs(7))),
    Mnemonic::new("VCDLGB", "VCFPL", &[(2, 3)], UNI.with(since_zs(7))),
    Mnemonic::new("VCEFB", "VCFPS", &[(2, 0)], UNI.with(since_zs(9))),
    Mnemonic::new("VCELFB", "VCFPL", &[(2, 0)], UNI.with(since_zs(9))),
    Mnemonic::new("VCEQB", "VCEQ", &[(3, 0), (4, 0)], UNI.with(since_zs(7))),
    Mnemonic::new("VCEQBS", "VCEQ", &[(3, 0), (4, 1)], UNI.with(since_zs(7))),
    Mnemonic::new("VCEQF", "VCEQ", &[(3, 2), (4, 0)], UNI.with(since_zs(7))),
    Mnemonic::new("VCEQFS", "VCEQ", &[(3, 2), (4, 1)], UNI.with(since_zs(7))),
    Mnemonic::new("VCEQG", "VCEQ", &[(3, 3), (4, 0)], UNI.with(since_zs(7))),
    Mnemonic::new("VCEQGS", "VCEQ", &[(3, 3), (4, 1)], UNI.with(since_zs(7))),
    Mnemonic::new("VCEQH", "VCEQ", &[(3, 1), (4, 0)], UNI.with(since_zs(7))),
    Mnemonic::new("VCEQHS", "VCEQ", &[(3, 1), (4, 1)], UNI.with(since_zs(7))),
    Mnemonic::new("VCFEB", "VCSFP", &[(2, 2)], UNI.with(since_zs(9))),
    Mnemonic::new("VCGD", "VCSFP", &[], UNI.with(since_zs(7))),
    Mnemonic::new("VCGDB", "VCSFP", &[(2, 3)], UNI.with(since_zs(7))),
    Mnemonic::new("VCHB", "VCH", &[(3, 0), (4, 0)], UNI.with(since_zs(7))),
    Mnemonic::new("VCHBS", "VCH", &[(3, 0), (4, 1)], UNI.with(since_zs(7))),
    Mnemonic::new("VCHF", "VCH", &[(3, 2), (4, 0)], UNI.with(since_zs(7))),
    Mnemonic::new("VCHFS", "VCH", &[(3, 2), (4, 1)], UNI.with(since_zs(7))),
    Mnemonic::new("VCHG", "VCH", &[(3, 3), (4, 0)], UNI.with(since_zs(7))),
    Mnemonic::new("VCHGS", "VCH", &[(3, 3), (4, 1)], UNI.with(since_zs(7))),
    Mnemonic::new("VCHH", "VCH", &[(3, 1), (4, 0)], UNI.with(since_zs(7))),
    Mnemonic::new("VCHHS", "VCH", &[(3, 1), (4, 1)], UNI.with(since_zs(7))),
    Mnemonic::new("VCHLB", "VCHL", &[(3, 0), (4, 0)], UNI.with(since_zs(7))),
    Mnemonic::new("VCHLBS", "VCHL", &[(3, 0), (4, 1)], UNI.with(since_zs(7))),
    Mnemonic::new("VCHLF", "VCHL", &[(3, 2), (4, 0)], UNI.with(since_zs(7))),
    Mnemonic::new("VCHLFS", "VCHL", &[(3, 2), (4, 1)], UNI.with(since_zs(7))),
    Mnemonic::new("VCHLG", "VCHL", &[(3, 3), (4, 0)], UNI.with(since_zs(7))),
    Mnemonic::new("VCHLGS", "VCHL", &[(3, 3), (4, 1)], UNI.with(since_zs(7))),
    Mnemonic::new("VCHLH", "VCHL", &[(3, 1), (4, 0)], UNI.with(since_zs(7))),
    Mnemonic::new("VCHLHS", "VCHL", &[(3, 1), (4, 1)], UNI.with(since_zs(7))),
    Mnemonic::new("VCLFEB", "VCLFP", &[(2, 0)], UNI.with(since_zs(9))),
    Mnemonic::new("VCLGDB", "VCLGD", &[(2, 3)], UNI.with(since_zs(7))),
    Mnemonic::new("VCLZB", "VCLZ", &[(2, 0)], UNI.with(since_zs(7))),
    Mnemonic::new("VCLZF", "VCLZ", &[(2, 2)], UNI.with(since_zs(7))),
    Mnemonic::new("VCLZG", "VCLZ", &[(2, 3)], UNI.with(since_zs(7))),
    Mnemonic::new("VCLZH", "VCLZ", &[(2, 1)], UNI.with(since_zs(7))),
    Mnemonic::new("VECB", "VEC", &[(2, 0)], UNI.with(since_zs(7))),
    Mnemonic::new("VECF", "VEC", &[(2, 2)], UNI.with(since_zs(7))),
    Mnemonic::new("VECG", "VEC", &[(2, 3)], UNI.with(since_zs(7))),
    Mnemonic::new("VECH", "VEC", &[(2, 1)], UNI.with(since_zs(7))),
    Mnemonic::new("VECLB", "VECL", &[(2, 0)], UNI.with(since_zs(7))),
    Mnemonic::new("VECLF", "VECL", &[(2, 2)], UNI.with(since_zs(7))),
    Mnemonic::new("VECLG", "VECL", &[(2, 3)], UNI.with(since_zs(7))),
    Mnemonic::new("VECLH", "VECL", &[(2, 1)], UNI.with(since_zs(7))),
    Mnemonic::new("VERIMB", "VERIM", &[(4, 0)], UNI.with(since_zs(7))),
    Mnemonic::new("VERIMF", "VERIM", &[(4, 2)], UNI.with(since_zs(7))),
    Mnemonic::new("VERIMG", "VERIM", &[(4, 3)], UNI.with(since_zs(7))),
    Mnemonic::new("VERIMH", "VERIM", &[(4, 1)], UNI.with(since_zs(7))),
    Mnemonic::new("VERLLB", "VERLL", &[(3, 0)], UNI.with(since_zs(7))),
    Mnemonic::new("VERLLF", "VERLL", &[(3, 2)], UNI.with(since_zs(7))),
    Mnemonic::new("VERLLG", "VERLL", &[(3, 3)], UNI.with(since_zs(7))),
    Mnemonic::new("VERLLH", "VERLL", &[(3, 1)], UNI.with(since_zs(7))),
    Mnemonic::new("VERLLVB", "VERLLV", &[(3, 0)], UNI.with(since_zs(7))),
    Mnemonic::new("VERLLVF", "VERLLV", &[(3, 2)], UNI.with(since_zs(7))),
    Mnemonic::new("VERLLVG", "VERLLV", &[(3, 3)], UNI.with(since_zs(7))),
    Mnemonic::new("VERLLVH", "VERLLV", &[(3, 1)], UNI.with(since_zs(7))),
    Mnemonic::new("VESLB", "VESL", &[(3, 0)], UNI.with(since_zs(7))),
    Mnemonic::new("VESLF", "VESL", &[(3, 2)], UNI.with(since_zs(7))),
    Mnemonic::new("VESLG", "VESL", &[(3, 3)], UNI.with(since_zs(7))),
    Mnemonic::new("VESLH", "VESL", &[(3, 1)], UNI.with(since_zs(7))),
    Mnemonic::new("VESLVB", "VESLV", &[(3, 0)], UNI.with(since_zs(7))),
    Mnemonic::new("VESLVF", "VESLV", &[(3, 2)], UNI.with(since_zs(7))),
    Mnemonic::new("VESLVG", "VESLV", &[(3, 3)], UNI.with(since_zs(7))),
    Mnemonic::new("VESLVH", "VESLV", &[(3, 1)], UNI.with(since_zs(7))),
    Mnemonic::new("VESRAB", "VESRA", &[(3, 0)], UNI.with(since_zs(7))),
    Mnemonic::new("VESRAF", "VESRA", &[(3, 2)], UNI.with(since_zs(7))),
    Mnemonic::new("VESRAG", "VESRA", &[(3, 3)], UNI.with(since_zs(7))),
    Mnemonic::new("VESRAH", "VESRA", &[(3, 1)], UNI.with(since_zs(7))),
    Mnemonic::new("VESRAVB", "VESRAV", &[(3, 0)], UNI.with(since_zs(7))),
    Mnemonic::new("VESRAVF", "VESRAV", &[(3, 2)], UNI.with(since_zs(7))),
    Mnemonic::new("VESRAVG", "VESRAV", &[(3, 3)], UNI.with(since_zs(7))),
    Mnemonic::new("VESRAVH", "VESRAV", &[(3, 1)], UNI.with(since_zs(7))),
    Mnemonic::new("VESRLB", "VESRL", &[(3, 0)], UNI.with(since_zs(7))),
    Mnemonic::new("VESRLF", "VESRL", &[(3, 2)], UNI.with(since_zs(7))),
    Mnemonic::new("VESRLG", "VESRL", &[(3, 3)], UNI.with(since_zs(7))),
    Mnemonic::new("VESRLH", "VESRL", &[(3, 1)], UNI.with(since_zs(7))),
    Mnemonic::new("VESRLVB", "VESRLV", &[(3, 0)], UNI.with(since_zs(7))),
    Mnemonic::new("VESRLVF", "VESRLV", &[(3, 2)], UNI.with(since_zs(7))),
    Mnemonic::new("VESRLVG", "VESRLV", &[(3, 3)], UNI.with(since_zs(7))),
    Mnemonic::new("VESRLVH", "VESRLV", &[(3, 1)], UNI.with(since_zs(7))),
    Mnemonic::new("VFADB", "VFA", &[(3, 3), (4, 0)], UNI.with(since_zs(7))),
    Mnemonic::new("VFAEB", "VFAE", &[(3, 0)], UNI.with(since_zs(7))),
    Mnemonic::new("VFAEBS", "VFAE", &[(3, 0)], UNI.with(since_zs(7))),
    Mnemonic::new("VFAEF", "VFAE", &[(3, 2)], UNI.with(since_zs(7))),
    Mnemonic::new("VFAEFS", "VFAE", &[(3, 2)], UNI.with(since_zs(7))),
    Mnemonic::new("VFAEH", "VFAE", &[(3, 1)], UNI.with(since_zs(7))),
    Mnemonic::new("VFAEHS", "VFAE", &[(3, 1)], UNI.with(since_zs(7))),
    Mnemonic::new("VFAEZB", "VFAE", &[(3, 0)], UNI.with(since_zs(7))),
    Mnemonic::new("VFAEZBS", "VFAE", &[(3, 0)], UNI.with(since_zs(7))),
    Mnemonic::new("VFAEZF", "VFAE", &[(3, 2)], UNI.with(since_zs(7))),
    Mnemonic::new("VFAEZFS", "VFAE", &[(3, 2)], UNI.with(since_zs(7))),
    Mnemonic::new("VFAEZH", "VFAE", &[(3, 1)], UNI.with(since_zs(7))),
    Mnemonic::new("VFAEZHS", "VFAE", &[(3, 1)], UNI.with(since_zs(7))),
    Mnemonic::new("VFASB", "VFA", &[(3, 2), (4, 0)], UNI.with(since_zs(8))),
    Mnemonic::new("VFCEDB", "VFCE", &[(3, 3), (4, 0), (5, 0)], UNI.with(since_zs(7))),
    Mnemonic::new("VFCEDBS", "VFCE", &[(3, 3), (4, 0), (5, 1)], UNI.with(since_zs(7))),
    Mnemonic::new("VFCESB", "VFCE", &[(3, 2), (4, 0), (5, 0)], UNI.with(since_zs(8))),
    Mnemonic::new("VFCESBS", "VFCE", &[(3, 2), (4, 0), (5, 1)], UNI.with(since_zs(8))),
    Mnemonic::new("VFCHDB", "VFCH", &[(3, 3), (4, 0), (5, 0)], UNI.with(since_zs(7))),
    Mnemonic::new("VFCHDBS", "VFCH", &[(3, 3), (4, 0), (5, 1)], UNI.with(since_zs(7))),
    Mnemonic::new("VFCHEDB", "VFCHE", &[(3, 3), (4, 0), (5, 0)], UNI.with(since_zs(7))),
    Mnemonic::new("VFCHEDBS", "VFCHE", &[(3, 3), (4, 0), (5, 1)], UNI.with(since_zs(7))),
    Mnemonic::new("VFCHESB", "VFCHE", &[(3, 2), (4, 0), (5, 0)], UNI.with(since_zs(8))),
    Mnemonic::new("VFCHESBS", "VFCHE", &[(3, 2), (4, 0), (5, 1)], UNI.with(since_zs(8))),
    Mnemonic::new("VFCHSB", "VFCH", &[(3, 2), (4, 0), (5, 0)], UNI.with(since_zs(8))),
    Mnemonic::new("VFCHSBS", "VFCH", &[(3, 2), (4, 0), (5, 1)], UNI.with(since_zs(8))),
    Mnemonic::new("VFDDB", "VFD", &[(3, 3), (4, 0)], UNI.with(since_zs(7))),
    Mnemonic::new("VFDSB", "VFD", &[(3, 2), (4, 0)], UNI.with(since_zs(8))),
    Mnemonic::new("VFEEB", "VFEE", &[(3, 0)], UNI.with(since_zs(7))),
    Mnemonic::new("VFEEBS", "VFEE", &[(3, 0), (4, 1)], UNI.with(since_zs(7))),
    Mnemonic::new("VFEEF", "VFEE", &[(3, 2)], UNI.with(since_zs(7))),
    Mnemonic::new("VFEEFS", "VFEE", &[(3, 2), (4, 1)], UNI.with(since_zs(7))),
    Mnemonic::new("VFEEGS", "VFEE", &[(3, 1), (4, 1)], UNKNOWN),
    Mnemonic::new("VFEEH", "VFEE", &[(3, 1)], UNI.with(since_zs(7))),
    Mnemonic::new("VFEEZB", "VFEE", &[(3, 0), (4, 2)], UNI.with(since_zs(7))),
    Mnemonic::new("VFEEZBS", "VFEE", &[(3, 0), (4, 3)], UNI.with(since_zs(7))),
    Mnemonic::new("VFEEZF", "VFEE", &[(3, 2), (4, 2)], UNI.with(since_zs(7))),
    Mnemonic::new("VFEEZFS", "VFEE", &[(3, 2), (4, 3)], UNI.with(since_zs(7))),
    Mnemonic::new("VFEEZH", "VFEE", &[(3, 1), (4, 2)], UNI.with(since_zs(7))),
    Mnemonic::new("VFEEZHS", "VFEE", &[(3, 1), (4, 3)], UNI.with(since_zs(7))),
    Mnemonic::new("VFENEB", "VFENE", &[(3, 0)], UNI.with(since_zs(7))),
    Mnemonic::new("VFENEBS", "VFENE", &[(3, 0), (4, 1)], UNI.with(since_zs(7))),
    Mnemonic::new("VFENEF", "VFENE", &[(3, 2)], UNI.with(since_zs(7))),
    Mnemonic::new("VFENEFS", "VFENE", &[(3, 2), (4, 1)], UNI.with(since_zs(7))),
    Mnemonic::new("VFENEH", "VFENE", &[(3, 1)], UNI.with(since_zs(7))),
    Mnemonic::new("VFENEHS", "VFENE", &[(3, 1), (4, 1)], UNI.with(since_zs(7))),
    Mnemonic::new("VFENEZB", "VFENE", &[(3, 0), (4, 2)], UNI.with(since_zs(7))),
    Mnemonic::new("VFENEZBS", "VFENE", &[(3, 0), (4, 3)], UNI.with(since_zs(7))),
    Mnemonic::new("VFENEZF", "VFENE", &[(3, 2), (4, 2)], UNI.with(since_zs(7))),
    Mnemonic::new("VFENEZFS", "VFENE", &[(3, 2), (4, 3)], UNI.with(since_zs(7))),
    Mnemonic::new("VFENEZH", "VFENE", &[(3, 1), (4, 2)], UNI.with(since_zs(7))),
    Mnemonic::new("VFENEZHS", "VFENE", &[(3, 1), (4, 3)], UNI.with(since_zs(7))),
    Mnemonic::new("VFIDB", "VFI", &[(2, 3)], UNI.with(since_zs(7))),
    Mnemonic::new("VFISB", "VFI", &[(2, 2)], UNI.with(since_zs(8))),
    Mnemonic::new("VFKEDB", "VFCE", &[(3, 3), (4, 4), (5, 0)], UNI.with(since_zs(8))),
    Mnemonic::new("VFKEDBS", "VFCE", &[(3, 3), (4, 4), (5, 1)], UNI.with(since_zs(8))),
    Mnemonic::new("VFKESB", "VFCE", &[(3, 2), (4, 4), (5, 0)], UNI.with(since_zs(8))),
    Mnemonic::new("VFKESBS", "VFCE", &[(3, 2), (4, 4), (5, 1)], UNI.with(since_zs(8))),
    Mnemonic::new("VFKHDB", "VFCH", &[(3, 3), (4, 4), (5, 0)], UNI.with(since_zs(8))),
    Mnemonic::new("VFKHDBS", "VFCH", &[(3, 3), (4, 4), (5, 1)], UNI.with(since_zs(8))),
    Mnemonic::new("VFKHEDB", "VFCHE", &[(3, 3), (4, 4), (5, 0)], UNI.with(since_zs(8))),
    Mnemonic::new("VFKHEDBS", "VFCHE", &[(3, 3), (4, 4), (5, 1)], UNI.with(since_zs(8))),
    Mnemonic::new("VFKHESB", "VFCHE", &[(3, 2), (4, 4), (5, 0)], UNI.with(since_zs(8))),
    Mnemonic::new("VFKHESBS", "VFCHE", &[(3, 2), (4, 4), (5, 1)], UNI.with(since_zs(8))),
    Mnemonic::new("VFKHSB", "VFCH", &[(3, 2), (4, 4), (5, 0)], UNI.with(since_zs(8))),
    Mnemonic::new("VFKHSBS", "VFCH", &[(3, 2), (4, 4), (5, 1)], UNI.with(since_zs(8))),
    Mnemonic::new("VFLCDB", "VFPSO", &[(2, 3), (3, 0), (4, 0)], UNI.with(since_zs(7))),
    Mnemonic::new("VFLCSB", "VFPSO", &[(2, 2), (3, 0), (4, 0)], UNI.with(since_zs(8))),
    Mnemonic::new("VFLLS", "VFLL", &[(2, 2), (3, 0)], UNI.with(since_zs(8))),
    Mnemonic::new("VFLNDB", "VFPSO", &[(2, 3), (3, 0), (4, 1)], UNI.with(since_zs(7))),
    Mnemonic::new("VFLNSB", "VFPSO", &[(2, 2), (3, 0), (4, 1)], UNI.with(since_zs(8))),
    Mnemonic::new("VFLPDB", "VFPSO", &[(2, 3), (3, 0), (4, 2)], UNI.with(since_zs(7))),
    Mnemonic::new("VFLPSB", "VFPSO", &[(2, 2), (3, 0), (4, 2)], UNI.with(since_zs(8))),
    Mnemonic::new("VFLRD", "VFLR", &[(2, 3)], UNI.with(since_zs(8))),
    Mnemonic::new("VFMADB", "VFMA", &[(4, 0), (5, 3)], UNI.with(since_zs(7))),
    Mnemonic::new("VFMASB", "VFMA", &[(4, 0), (5, 2)], UNI.with(since_zs(8))),
    Mnemonic::new("VFMAXDB", "VFMAX", &[(3, 3), (4, 0)], UNI.with(since_zs(8))),
    Mnemonic::new("VFMAXSB", "VFMAX", &[(3, 2), (4, 0)], UNI.with(since_zs(8))),
    Mnemonic::new("VFMDB", "VFM", &[(3, 3), (4, 0)], UNI.with(since_zs(7))),
    Mnemonic::new("VFMINDB", "VFMIN", &[(3, 3), (4, 0)], UNI.with(since_zs(8))),
    Mnemonic::new("VFMINSB", "VFMIN", &[(3, 2), (4, 0)], UNI.with(since_zs(8))),
    Mnemonic::new("VFMSB", "VFM", &[(3, 2), (4, 0)], UNI.with(since_zs(8))),
    Mnemonic::new("VFMSDB", "VFMS", &[(4, 0), (5, 3)], UNI.with(since_zs(7))),
    Mnemonic::new("VFMSSB", "VFMS", &[(4, 0), (5, 2)], UNI.with(since_zs(8))),
    Mnemonic::new("VFNMADB", "VFNMA", &[(4, 0), (5, 3)], UNI.with(since_zs(8))),
    Mnemonic::new("VFNMASB", "VFNMA", &[(4, 0), (5, 2)], UNI.with(since_zs(8))),
    Mnemonic::new("VFNMSDB", "VFNMS", &[(4, 0), (5, 3)], UNI.with(since_zs(8))),
    Mnemonic::new("VFNMSSB", "VFNMS", &[(4, 0), (5, 2)], UNI.with(since_zs(8))),
    Mnemonic::new("VFPSODB", "VFPSO", &[(2, 3), (3, 0)], UNI.with(since_zs(7))),
    Mnemonic::new("VFPSOSB", "VFPSO", &[(2, 2), (3, 0)], UNI.with(since_zs(8))),
    Mnemonic::new("VFSDB", "VFS", &[(2, 3), (3, 0)], UNI.with(since_zs(7))),
    Mnemonic::new("VFSQDB", "VFSQ", &[(2, 3), (3, 0)], UNI.with(since_zs(7))),
    Mnemonic::new("VFSQSB", "VFSQ", &[(2, 2), (3, 0)], UNI.with(since_zs(8))),
    Mnemonic::new("VFSSB", "VFS", &[(2, 2), (3, 0)], UNI.with(since_zs(8))),
    Mnemonic::new("VFTCIDB", "VFTCI", &[(3, 3), (4, 0)], UNI.with(since_zs(7))),
    Mnemonic::new("VFTCISB", "VFTCI", &[(3, 2), (4, 0)], UNI.with(since_zs(8))),
    Mnemonic::new("VGFMAB", "VGFMA", &[(4, 0)], UNI.with(since_zs(7))),
    Mnemonic::new("VGFMAF", "VGFMA", &[(4, 2)], UNI.with(since_zs(7))),
    Mnemonic::new("VGFMAG", "VGFMA", &[(4, 3)], UNI.with(since_zs(7))),
    Mnemonic::new("VGFMAH", "VGFMA", &[(4, 1)], UNI.with(since_zs(7))),
    Mnemonic::new("VGFMB", "VGFM", &[(3, 0)], UNI.with(since_zs(7))),
    Mnemonic::new("VGFMF", "VGFM", &[(3, 2)], UNI.with(since_zs(7))),
    Mnemonic::new("VGFMG", "VGFM", &[(3, 3)], UNI.with(since_zs(7))),
    Mnemonic::new("VGFMH", "VGFM", &[(3, 1)], UNI.with(since_zs(7))),
    Mnemonic::new("VGMB", "VGM", &[(3, 0)], UNI.with(since_zs(7))),
    Mnemonic::new("VGMF", "VGM", &[(3, 2)], UNI.with(since_zs(7))),
    Mnemonic::new("VGMG", "VGM", &[(3, 3)], UNI.with(since_zs(7))),
    Mnemonic::new("VGMH", "VGM", &[(3, 1)], UNI.with(since_zs(7))),
    Mnemonic::new("VISTRB", "VISTR", &[(3, 0)], UNI.with(since_zs(7))),
    Mnemonic::new("VISTRBS", "VISTR", &[(3, 0), (4, 1)], UNI.with(since_zs(7))),
    Mnemonic::new("VISTRF", "VISTR", &[(3, 2)], UNI.with(since_zs(7))),
    Mnemonic::new("VISTRFS", "VISTR", &[(3, 2), (4, 1)], UNI.with(since_zs(7))),
    Mnemonic::new("VISTRH", "VISTR", &[(3, 1)], UNI.with(since_zs(7))),
    Mnemonic::new("VISTRHS", "VISTR", &[(3, 1), (4, 1)], UNI.with(since_zs(7))),
    Mnemonic::new("VLBRF", "VLBR", &[(2, 2)], UNI.with(since_zs(9))),
    Mnemonic::new("VLBRG", "VLBR", &[(2, 3)], UNI.with(since_zs(9))),
    Mnemonic::new("VLBRH", "VLBR", &[(2, 1)], UNI.with(since_zs(9))),
    Mnemonic::new("VLBRQ", "VLBR", &[(2, 4)], UNI.with(since_zs(9))),
    Mnemonic::new("VLBRREPF", "VLBRREP", &[(2, 2)], UNI.with(since_zs(9))),
    Mnemonic::new("VLBRREPG", "VLBRREP", &[(2, 3)], UNI.with(since_zs(9))),
    Mnemonic::new("VLBRREPH", "VLBRREP", &[(2, 1)], UNI.with(since_zs(9))),
    Mnemonic::new("VLCB", "VLC", &[(2, 0)], UNI.with(since_zs(7))),
    Mnemonic::new("VLCF", "VLC", &[(2, 2)], UNI.with(since_zs(7))),
    Mnemonic::new("VLCG", "VLC", &[(2, 3)], UNI.with(since_zs(7))),
    Mnemonic::new("VLCH", "VLC", &[(2, 1)], UNI.with(since_zs(7))),
    Mnemonic::new("VLDE", "VFLL", &[], UNI.with(since_zs(7))),
    Mnemonic::new("VLDEB", "VFLL", &[(2, 2), (3, 0)], UNI.with(since_zs(7))),
    Mnemonic::new("VLED", "VFLR", &[], UNI.with(since_zs(7))),
    Mnemonic::new("VLEDB", "VFLR", &[(2, 3)], UNI.with(since_zs(7))),
    Mnemonic::new("VLERF", "VLER", &[(2, 2)], UNI.with(since_zs(9))),
    Mnemonic::new("VLERG", "VLER", &[(2, 3)], UNI.with(since_zs(9))),
    Mnemonic::new("VLERH", "VLER", &[(2, 1)], UNI.with(since_zs(9))),
    Mnemonic::new("VLGVB", "VLGV", &[(3, 0)], UNI.with(since_zs(7))),
    Mnemonic::new("VLGVF", "VLGV", &[(3, 2)], UNI.with(since_zs(7))),
    Mnemonic::new("VLGVG", "VLGV", &[(3, 3)], UNI.with(since_zs(7))),
    Mnemonic::new("VLGVH", "VLGV", &[(3, 1)], UNI.with(since_zs(7))),
    Mnemonic::new("VLLEBRZE", "VLLEBRZ", &[(2, 6)], UNI.with(since_zs(9))),
    Mnemonic::new("VLLEBRZF", "VLLEBRZ", &[(2, 2)], UNI.with(since_zs(9))),
    Mnemonic::new("VLLEBRZG", "VLLEBRZ", &[(2, 3)], UNI.with(since_zs(9))),
    Mnemonic::new("VLLEBRZH", "VLLEBRZ", &[(2, 1)], UNI.with(since_zs(9))),
    Mnemonic::new("VLLEZB", "VLLEZ", &[(2, 0)], UNI.with(since_zs(7))),
    Mnemonic::new("VLLEZF", "VLLEZ", &[(2, 2)], UNI.with(since_zs(7))),
    Mnemonic::new("VLLEZG", "VLLEZ", &[(2, 3)], UNI.with(since_zs(7))),
    Mnemonic::new("VLLEZH", "VLLEZ", &[(2, 1)], UNI.with(since_zs(7))),
    Mnemonic::new("VLLEZLF", "VLLEZ", &[(2, 6)], UNI.with(since_zs(8))),
    Mnemonic::new("VLPB", "VLP", &[(2, 0)], UNI.with(since_zs(7))),
    Mnemonic::new("VLPF", "VLP", &[(2, 2)], UNI.with(since_zs(7))),
    Mnemonic::new("VLPG", "VLP", &[(2, 3)], UNI.with(since_zs(7))),
    Mnemonic::new("VLPH", "VLP", &[(2, 1)], UNI.with(since_zs(7))),
    Mnemonic::new("VLREPB", "VLREP", &[(2, 0)], UNI.with(since_zs(7))),
    Mnemonic::new("VLREPF", "VLREP", &[(2, 2)], UNI.with(since_zs(7))),
    Mnemonic::new("VLREPG", "VLREP", &[(2, 3)], UNI.with(since_zs(7))),
    Mnemonic::new("VLREPH", "VLREP", &[(2, 1)], UNI.with(since_zs(7))),
    Mnemonic::new("VLVGB", "VLVG", &[(3, 0)], UNI.with(since_zs(7))),
    Mnemonic::new("VLVGF", "VLVG", &[(3, 2)], UNI.with(since_zs(7))),
    Mnemonic::new("VLVGG", "VLVG", &[(3, 3)], UNI.with(since_zs(7))),
    Mnemonic::new("VLVGH", "VLVG", &[(3, 1)], UNI.with(since_zs(7))),
    Mnemonic::new("VMAEB", "VMAE", &[(4, 0)], UNI.with(since_zs(7))),
    Mnemonic::new("VMAEF", "VMAE", &[(4, 2)], UNI.with(since_zs(7))),
    Mnemonic::new("VMAEH", "VMAE", &[(4, 1)], UNI.with(since_zs(7))),
    Mnemonic::new("VMAHB", "VMAH", &[(4, 0)], UNI.with(since_zs(7))),
    Mnemonic::new("VMAHF", "VMAH", &[(4, 2)], UNI.with(since_zs(7))),
    Mnemonic::new("VMAHH", "VMAH", &[(4, 1)], UNI.with(since_zs(7))),
    Mnemonic::new("VMALB", "VMAL", &[(4, 0)], UNI.with(since_zs(7))),
    Mnemonic::new("VMALEB", "VMALE", &[(4, 0)], UNI.with(since_zs(7))),
    Mnemonic::new("VMALEF", "VMALE", &[(4, 2)], UNI.with(since_zs(7))),
    Mnemonic::new("VMALEH", "VMALE", &[(4, 1)], UNI.with(since_zs(7))),
    Mnemonic::new("VMALF", "VMAL", &[(4, 2)], UNI.with(since_zs(7))),
    Mnemonic::new("VMALHB", "VMALH", &[(4, 0)], UNI.with(since_zs(7))),
    Mnemonic::new("VMALHF", "VMALH", &[(4, 2)], UNI.with(since_zs(7))),
    Mnemonic::new("VMALHH", "VMALH", &[(4, 1)], UNI.with(since_zs(7))),
    Mnemonic::new("VMALHW", "VMAL", &[(4, 1)], UNI.with(since_zs(7))),
    Mnemonic::new("VMALOB", "VMALO", &[(4, 0)], UNI.with(since_zs(7))),
    Mnemonic::new("VMALOF", "VMALO", &[(4, 2)], UNI.with(since_zs(7))),
    Mnemonic::new("VMALOH", "VMALO", &[(4, 1)], UNI.with(since_zs(7))),
    Mnemonic::new("VMAOB", "VMAO", &[(4, 0)], UNI.with(since_zs(7))),
    Mnemonic::new("VMAOF", "VMAO", &[(4, 2)], UNI.with(since_zs(7))),
    Mnemonic::new("VMAOH", "VMAO", &[(4, 1)], UNI.with(since_zs(7))),
    Mnemonic::new("VMEB", "VME", &[(3, 0)], UNI.with(since_zs(7))),
    Mnemonic::new("VMEF", "VME", &[(3, 2)], UNI.with(since_zs(7))),
    Mnemonic::new("VMEH", "VME", &[(3, 1)], UNI.with(since_zs(7))),
    Mnemonic::new("VMHB", "VMH", &[(3, 0)], UNI.with(since_zs(7))),
    Mnemonic::new("VMHF", "VMH", &[(3, 2)], UNI.with(since_zs(7))),
    Mnemonic::new("VMHH", "VMH", &[(3, 1)], UNI.with(since_zs(7))),
    Mnemonic::new("VMLB", "VML", &[(3, 0)], UNI.with(since_zs(7))),
    Mnemonic::new("VMLEB", "VMLE", &[(3, 0)], UNI.with(since_zs(7))),
    Mnemonic::new("VMLEF", "VMLE", &[(3, 2)], UNI.with(since_zs(7))),
    Mnemonic::new("VMLEH", "VMLE", &[(3, 1)], UNI.with(since_zs(7))),
    Mnemonic::new("VMLF", "VML", &[(3, 2)], UNI.with(since_zs(7))),
    Mnemonic::new("VMLHB", "VMLH", &[(3, 0)], UNI.with(since_zs(7))),
    Mnemonic::new("VMLHF", "VMLH", &[(3, 2)], UNI.with(since_zs(7))),
    Mnemonic::new("VMLHH", "VMLH", &[(3, 1)], UNI.with(since_zs(7))),
    Mnemonic::new("VMLHW", "VML", &[(3, 1)], UNI.with(since_zs(7))),
    Mnemonic::new("VMLOB", "VMLO", &[(3, 0)], UNI.with(since_zs(7))),
    Mnemonic::new("VMLOF", "VMLO", &[(3, 2)], UNI.with(since_zs(7))),
    Mnemonic::new("VMLOH", "VMLO", &[(3, 1)], UNI.with(since_zs(7))),
    Mnemonic::new("VMNB", "VMN", &[(3, 0)], UNI.with(since_zs(7))),
    Mnemonic::new("VMNF", "VMN", &[(3, 2)], UNI.with(since_zs(7))),
    Mnemonic::new("VMNG", "VMN", &[(3, 3)], UNI.with(since_zs(7))),
    Mnemonic::new("VMNH", "VMN", &[(3, 1)], UNI.with(since_zs(7))),
    Mnemonic::new("VMNLB", "VMNL", &[(3, 0)], UNI.with(since_zs(7))),
    Mnemonic::new("VMNLF", "VMNL", &[(3, 2)], UNI.with(since_zs(7))),
    Mnemonic::new("VMNLG", "VMNL", &[(3, 3)], UNI.with(since_zs(7))),
    Mnemonic::new("VMNLH", "VMNL", &[(3, 1)], UNI.with(since_zs(7))),
    Mnemonic::new("VMOB", "VMO", &[(3, 0)], UNI.with(since_zs(7))),
    Mnemonic::new("VMOF", "VMO", &[(3, 2)], UNI.with(since_zs(7))),
    Mnemonic::new("VMOH", "VMO", &[(3, 1)], UNI.with(since_zs(7))),
    Mnemonic::new("VMRHB", "VMRH", &[(3, 0)], UNI.with(since_zs(7))),
    Mnemonic::new("VMRHF", "VMRH", &[(3, 2)], UNI.with(since_zs(7))),
    Mnemonic::new("VMRHG", "VMRH", &[(3, 3)], UNI.with(since_zs(7))),
    Mnemonic::new("VMRHH", "VMRH", &[(3, 1)], UNI.with(since_zs(7))),
    Mnemonic::new("VMRLB", "VMRL", &[(3, 0)], UNI.with(since_zs(7))),
    Mnemonic::new("VMRLF", "VMRL", &[(3, 2)], UNI.with(since_zs(7))),
    Mnemonic::new("VMRLG", "VMRL", &[(3, 3)], UNI.with(since_zs(7))),
    Mnemonic::new("VMRLH", "VMRL", &[(3, 1)], UNI.with(since_zs(7))),
    Mnemonic::new("VMSLG", "VMSL", &[(4, 3)], UNI.with(since_zs(8))),
    Mnemonic::new("VMXB", "VMX", &[(3, 0)], UNI.with(since_zs(7))),
    Mnemonic::new("VMXF", "VMX", &[(3, 2)], UNI.with(since_zs(7))),
    Mnemonic::new("VMXG", "VMX", &[(3, 3)], UNI.with(since_zs(7))),
    Mnemonic::new("VMXH", "VMX", &[(3, 1)], UNI.with(since_zs(7))),
    Mnemonic::new("VMXLB", "VMXL", &[(3, 0)], UNI.with(since_zs(7))),
    Mnemonic::new("VMXLF", "VMXL", &[(3, 2)], UNI.with(since_zs(7))),
    Mnemonic::new("VMXLG", "VMXL", &[(3, 3)], UNI.with(since_zs(7))),
    Mnemonic::new("VMXLH", "VMXL", &[(3, 1)], UNI.with(since_zs(7))),
    Mnemonic::new("VNOT", "VNO", &[(2, 0)], UNI.with(since_zs(7))),
    Mnemonic::new("VONE", "VGBM", &[(1, 65535)], UNI.with(since_zs(7))),
    Mnemonic::new("VPKF", "VPK", &[(3, 2)], UNI.with(since_zs(7))),
    Mnemonic::new("VPKG", "VPK", &[(3, 3)], UNI.with(since_zs(7))),
    Mnemonic::new("VPKH", "VPK", &[(3, 1)], UNI.with(since_zs(7))),
    Mnemonic::new("VPKLSF", "VPKLS", &[(3, 2), (4, 0)], UNI.with(since_zs(7))),
    Mnemonic::new("VPKLSFS", "VPKLS", &[(3, 2), (4, 1)], UNI.with(since_zs(7))),
    Mnemonic::new("VPKLSG", "VPKLS", &[(3, 3), (4, 0)], UNI.with(since_zs(7))),
    Mnemonic::new("VPKLSGS", "VPKLS", &[(3, 3), (4, 1)], UNI.with(since_zs(7))),
    Mnemonic::new("VPKLSH", "VPKLS", &[(3, 1), (4, 0)], UNI.with(since_zs(7))),
    Mnemonic::new("VPKLSHS", "VPKLS", &[(3, 1), (4, 1)], UNI.with(since_zs(7))),
    Mnemonic::new("VPKSF", "VPKS", &[(3, 2), (4, 0)], UNI.with(since_zs(7))),
    Mnemonic::new("VPKSFS", "VPKS", &[(3, 2), (4, 1)], UNI.with(since_zs(7))),
    Mnemonic::new("VPKSG", "VPKS", &[(3, 3), (4, 0)], UNI.with(since_zs(7))),
    Mnemonic::new("VPKSGS", "VPKS", &[(3, 3), (4, 1)], UNI.with(since_zs(7))),
    Mnemonic::new("VPKSH", "VPKS", &[(3, 1), (4, 0)], UNI.with(since_zs(7))),
    Mnemonic::new("VPKSHS", "VPKS", &[(3, 1), (4, 1)], UNI.with(since_zs(7))),
    Mnemonic::new("VPOPCTB", "VPOPCT", &[(2, 0)], UNI.with(since_zs(8))),
    Mnemonic::new("VPOPCTF", "VPOPCT", &[(2, 2)], UNI.with(since_zs(8))),
    Mnemonic::new("VPOPCTG", "VPOPCT", &[(2, 3)], UNI.with(since_zs(8))),
    Mnemonic::new("VPOPCTH", "VPOPCT", &[(2, 1)], UNI.with(since_zs(8))),
    Mnemonic::new("VREPB", "VREP", &[(3, 0)], UNI.with(since_zs(7))),
    Mnemonic::new("VREPF", "VREP", &[(3, 2)], UNI.with(since_zs(7))),
    Mnemonic::new("VREPG", "VREP", &[(3, 3)], UNI.with(since_zs(7))),
    Mnemonic::new("VREPH", "VREP", &[(3, 1)], UNI.with(since_zs(7))),
    Mnemonic::new("VREPIB", "VREPI", &[(2, 0)], UNI.with(since_zs(7))),
    Mnemonic::new("VREPIF", "VREPI", &[(2, 2)], UNI.with(since_zs(7))),
    Mnemonic::new("VREPIG", "VREPI", &[(2, 3)], UNI.with(since_zs(7))),
    Mnemonic::new("VREPIH", "VREPI", &[(2, 1)], UNI.with(since_zs(7))),
    Mnemonic::new("VSB", "VS", &[(3, 0)], UNI.with(since_zs(7))),
    Mnemonic::new("VSBCBIQ", "VSBCBI", &[(4, 4)], UNI.with(since_zs(7))),
    Mnemonic::new("VSBIQ", "VSBI", &[(4, 4)], UNI.with(since_zs(7))),
    Mnemonic::new("VSCBIB", "VSCBI", &[(3, 0)], UNI.with(since_zs(7))),
    Mnemonic::new("VSCBIF", "VSCBI", &[(3, 2)], UNI.with(since_zs(7))),
    Mnemonic::new("VSCBIG", "VSCBI", &[(3, 3)], UNI.with(since_zs(7))),
    Mnemonic::new("VSCBIH", "VSCBI", &[(3, 1)], UNI.with(since_zs(7))),
    Mnemonic::new("VSCBIQ", "VSCBI", &[(3, 4)], UNI.with(since_zs(7))),
    Mnemonic::new("VSEGB", "VSEG", &[(2, 0)], UNI.with(since_zs(7))),
    Mnemonic::new("VSEGF", "VSEG", &[(2, 2)], UNI.with(since_zs(7))),
    Mnemonic::new("VSEGH", "VSEG", &[(2, 1)], UNI.with(since_zs(7))),
    Mnemonic::new("VSF", "VS", &[(3, 2)], UNI.with(since_zs(7))),
    Mnemonic::new("VSG", "VS", &[(3, 3)], UNI.with(since_zs(7))),
    Mnemonic::new("VSH", "VS", &[(3, 1)], UNI.with(since_zs(7))),
    Mnemonic::new("VSQ", "VS", &[(3, 4)], UNI.with(ESA).with(XA).with(_370).with(since_zs(7))),
    Mnemonic::new("VSTBRF", "VSTBR", &[(2, 2)], UNI.with(since_zs(9))),
    Mnemonic::new("VSTBRG", "VSTBR", &[(2, 3)], UNI.with(since_zs(9))),
    Mnemonic::new("VSTBRH", "VSTBR", &[(2, 1)], UNI.with(since_zs(9))),
    Mnemonic::new("VSTBRQ", "VSTBR", &[(2, 4)], UNI.with(since_zs(9))),
    Mnemonic::new("VSTERF", "VSTER", &[(2, 2)], UNI.with(since_zs(9))),
    Mnemonic::new("VSTERG", "VSTER", &[(2, 3)], UNI.with(since_zs(9))),
    Mnemonic::new("VSTERH", "VSTER", &[(2, 1)], UNI.with(since_zs(9))),
    Mnemonic::new("VSTRCB", "VSTRC", &[(4, 0)], UNI.with(since_zs(7))),
    Mnemonic::new("VSTRCBS", "VSTRC", &[(4, 0)], UNI.with(since_zs(7))),
    Mnemonic::new("VSTRCF", "VSTRC", &[(4, 2)], UNI.with(since_zs(7))),
    Mnemonic::new("VSTRCFS", "VSTRC", &[(4, 2)], UNI.with(since_zs(7))),
    Mnemonic::new("VSTRCH", "VSTRC", &[(4, 1)], UNI.with(since_zs(7))),
    Mnemonic::new("VSTRCHS", "VSTRC", &[(4, 1)], UNI.with(since_zs(7))),
    Mnemonic::new("VSTRCZB", "VSTRC", &[(4, 0)], UNI.with(since_zs(7))),
    Mnemonic::new("VSTRCZBS", "VSTRC", &[(4, 0)], UNI.with(since_zs(7))),
    Mnemonic::new("VSTRCZF", "VSTRC", &[(4, 2)], UNI.with(since_zs(7))),
    Mnemonic::new("VSTRCZFS", "VSTRC", &[(4, 2)], UNI.with(since_zs(7))),
    Mnemonic::new("VSTRCZH", "VSTRC", &[(4, 1)], UNI.with(since_zs(7))),
    Mnemonic::new("VSTRCZHS", "VSTRC", &[(4, 1)], UNI.with(since_zs(7))),
    Mnemonic::new("VSTRSB", "VSTRS", &[(4, 0)], UNI.with(since_zs(9))),
    Mnemonic::new("VSTRSF", "VSTRS", &[(4, 2)], UNI.with(since_zs(9))),
    Mnemonic::new("VSTRSH", "VSTRS", &[(4, 1)], UNI.with(since_zs(9))),
    Mnemonic::new("VSTRSZB", "VSTRS", &[(4, 0), (5, 2)], UNI.with(since_zs(9))),
    Mnemonic::new("VSUMB", "VSUM", &[(3, 0)], UNI.with(since_zs(7))),
    Mnemonic::new("VSUMGF", "VSUMG", &[(3, 2)], UNI.with(since_zs(7))),
    Mnemonic::new("VSUMGH", "VSUMG", &[(3, 1)], UNI.with(since_zs(7))),
    Mnemonic::new("VSUMH", "VSUM", &[(3, 1)], UNI.with(since_zs(7))),
    Mnemonic::new("VSUMQF", "VSUMQ", &[(3, 2)], UNI.with(since_zs(7))),
    Mnemonic::new("VSUMQG", "VSUMQ", &[(3, 3)], UNI.with(since_zs(7))),
    Mnemonic::new("VUPHB", "VUPH", &[(2, 0)], UNI.with(since_zs(7))),
    Mnemonic::new("VUPHF", "VUPH", &[(2, 2)], UNI.with(since_zs(7))),
    Mnemonic::new("VUPHH", "VUPH", &[(2, 1)], UNI.with(since_zs(7))),
    Mnemonic::new("VUPLB", "VUPL", &[(2, 0)], UNI.with(since_zs(7))),
    Mnemonic::new("VUPLF", "VUPL", &[(2, 2)], UNI.with(since_zs(7))),
    Mnemonic::new("VUPLHB", "VUPLH", &[(2, 0)], UNI.with(since_zs(7))),
    Mnemonic::new("VUPLHF", "VUPLH", &[(2, 2)], UNI.with(since_zs(7))),
    Mnemonic::new("VUPLHG", "VUPLH", &[(2, 1)], UNKNOWN),
    Mnemonic::new("VUPLHW", "VUPL", &[(2, 1)], UNI.with(since_zs(7))),
    Mnemonic::new("VUPLLB", "VUPLL", &[(2, 0)], UNI.with(since_zs(7))),
    Mnemonic::new("VUPLLF", "VUPLL", &[(2, 2)], UNI.with(since_zs(7))),
    Mnemonic::new("VUPLLH", "VUPLL", &[(2, 1)], UNI.with(since_zs(7))),
    Mnemonic::new("VZERO", "VGBM", &[(0, 1)], UNI.with(since_zs(7))),
    Mnemonic::new("WCDGB", "VCFPS", &[(2, 3)], UNI.with(since_zs(7))),
    Mnemonic::new("WCDLGB", "VCFPL", &[(2, 3)], UNI.with(since_zs(7))),
    Mnemonic::new("WCEFB", "VCFPS", &[(2, 2)], UNI.with(since_zs(9))),
    Mnemonic::new("WCELFB", "VCFPL", &[(2, 2)], UNI.with(since_zs(9))),
    Mnemonic::new("WCFEB", "VCSFP", &[(2, 2)], UNI.with(since_zs(9))),
    Mnemonic::new("WCGDB", "VCSFP", &[(2, 3)], UNI.with(since_zs(7))),
    Mnemonic::new("WCLFEB", "VCLFP", &[(2, 2)], UNI.with(since_zs(9))),
    Mnemonic::new("WCLGDB", "VCLGD", &[(2, 3)], UNI.with(since_zs(7))),
    Mnemonic::new("WFADB", "VFA", &[(3, 3), (4, 8)], UNI.with(since_zs(7))),
    Mnemonic::new("WFASB", "VFA", &[(3, 2), (4, 8)], UNI.with(since_zs(8))),
    Mnemonic::new("WFAXB", "VFA", &[(3, 4), (4, 8)], UNI.with(since_zs(8))),
    Mnemonic::new("WFCDB", "WFC", &[(3, 3), (4, 0)], UNI.with(since_zs(7))),
    Mnemonic::new("WFCEDB", "VFCE", &[(3, 3), (4, 8), (5, 0)], UNI.with(since_zs(7))),
    Mnemonic::new("WFCEDBS", "VFCE", &[(3, 3), (4, 8), (5, 1)], UNI.with(since_zs(7))),
    Mnemonic::new("WFCESB", "VFCE", &[(3, 2), (4, 8), (5, 0)], UNI.with(since_zs(8))),
    Mnemonic::new("WFCESBS", "VFCE", &[(3, 2), (4, 8), (5, 1)], UNI.with(since_zs(8))),
    Mnemonic::new("WFCEXB", "VFCE", &[(3, 4), (4, 8), (5, 0)], UNI.with(since_zs(8))),
    Mnemonic::new("WFCEXBS", "VFCE", &[(3, 4), (4, 8), (5, 1)], UNI.with(since_zs(8))),
    Mnemonic::new("WFCHDB", "VFCH", &[(3, 3), (4, 8), (5, 0)], UNI.with(since_zs(7))),
    Mnemonic::new("WFCHDBS", "VFCH", &[(3, 3), (4, 8), (5, 1)], UNI.with(since_zs(7))),
    Mnemonic::new("WFCHEDB", "VFCHE", &[(3, 3), (4, 8), (5, 0)], UNI.with(since_zs(7))),
    Mnemonic::new("WFCHEDBS", "VFCHE", &[(3, 3), (4, 8), (5, 1)], UNI.with(since_zs(7))),
    Mnemonic::new("WFCHESB", "VFCHE", &[(3, 2), (4, 8), (5, 0)], UNI.with(since_zs(8))),
    Mnemonic::new("WFCHESBS", "VFCHE", &[(3, 2), (4, 8), (5, 1)], UNI.with(since_zs(8))),
    Mnemonic::new("WFCHEXB", "VFCHE", &[(3, 4), (4, 8), (5, 0)], UNI.with(since_zs(8))),
    Mnemonic::new("WFCHEXBS", "VFCHE", &[(3, 4), (4, 8), (5, 1)], UNI.with(since_zs(8))),
    Mnemonic::new("WFCHSB", "VFCH", &[(3, 2), (4, 8), (5, 0)], UNI.with(since_zs(8))),
    Mnemonic::new("WFCHSBS", "VFCH", &[(3, 2), (4, 8), (5, 1)], UNI.with(since_zs(8))),
    Mnemonic::new("WFCHXB", "VFCH", &[(3, 4), (4, 8), (5, 0)], UNI.with(since_zs(8))),
    Mnemonic::new("WFCHXBS", "VFCH", &[(3, 4), (4, 8), (5, 1)], UNI.with(since_zs(8))),
    Mnemonic::new("WFCSB", "WFC", &[(3, 2), (4, 0)], UNI.with(since_zs(8))),
    Mnemonic::new("WFCXB", "WFC", &[(3, 4), (4, 0)], UNI.with(since_zs(8))),
    Mnemonic::new("WFDDB", "VFD", &[(3, 3), (4, 8)], UNI.with(since_zs(7))),
    Mnemonic::new("WFDSB", "VFD", &[(3, 2), (4, 8)], UNI.with(since_zs(8))),
    Mnemonic::new("WFDXB", "VFD", &[(3, 4), (4, 8)], UNI.with(since_zs(8))),
    Mnemonic::new("WFIDB", "VFI", &[(2, 3)], UNI.with(since_zs(7))),
    Mnemonic::new("WFISB", "VFI", &[(2, 2)], UNI.with(since_zs(8))),
    Mnemonic::new("WFIXB", "VFI", &[(2, 4)], UNI.with(since_zs(8))),
    Mnemonic::new("WFKDB", "WFK", &[(3, 3), (4, 0)], UNI.with(since_zs(7))),
    Mnemonic::new("WFKEDB", "VFCE", &[(3, 3), (4, 12), (5, 0)], UNI.with(since_zs(8))),
    Mnemonic::new("WFKEDBS", "VFCE", &[(3, 3), (4, 12), (5, 1)], UNI.with(since_zs(8))),
    Mnemonic::new("WFKESB", "VFCE", &[(3, 2), (4, 12), (5, 0)], UNI.with(since_zs(8))),
    Mnemonic::new("WFKESBS", "VFCE", &[(3, 2), (4, 12), (5, 1)], UNI.with(since_zs(8))),
    Mnemonic::new("WFKEXB", "VFCE", &[(3, 4), (4, 12), (5, 0)], UNI.with(since_zs(8))),
    Mnemonic::new("WFKEXBS", "VFCE", &[(3, 4), (4, 12), (5, 1)], UNI.with(since_zs(8))),
    Mnemonic::new("WFKHDB", "VFCH", &[(3, 3), (4, 12), (5, 0)], UNI.with(since_zs(8))),
    Mnemonic::new("WFKHDBS", "VFCH", &[(3, 3), (4, 12), (5, 1)], UNI.with(since_zs(8))),
    Mnemonic::new("WFKHEDB", "VFCHE", &[(3, 3), (4, 12), (5, 0)], UNI.with(since_zs(8))),
    Mnemonic::new("WFKHEDBS", "VFCHE", &[(3, 3), (4, 12), (5, 1)], UNI.with(since_zs(8))),
    Mnemonic::new("WFKHESB", "VFCHE", &[(3, 2), (4, 12), (5, 0)], UNI.with(since_zs(8))),
    Mnemonic::new("WFKHESBS", "VFCHE", &[(3, 2), (4, 12), (5, 1)], UNI.with(since_zs(8))),
    Mnemonic::new("WFKHEXB", "VFCHE", &[(3, 4), (4, 12), (5, 0)], UNI.with(since_zs(8))),
    Mnemonic::new("WFKHEXBS", "VFCHE", &[(3, 4), (4, 12), (5, 1)], UNI.with(since_zs(8))),
    Mnemonic::new("WFKHSB", "VFCH", &[(3, 2), (4, 12), (5, 0)], UNI.with(since_zs(8))),
    Mnemonic::new("WFKHSBS", "VFCH", &[(3, 2), (4, 12), (5, 1)], UNI.with(since_zs(8))),
    Mnemonic::new("WFKHXB", "VFCH", &[(3, 4), (4, 12), (5, 0)], UNI.with(since_zs(8))),
    Mnemonic::new("WFKHXBS", "VFCH", &[(3, 4), (4, 12), (5, 1)], UNI.with(since_zs(8))),
    Mnemonic::new("WFKSB", "WFK", &[(3, 2), (4, 0)], UNI.with(since_zs(8))),
    Mnemonic::new("WFKXB", "WFK", &[(3, 4), (4, 0)], UNI.with(since_zs(8))),
    Mnemonic::new("WFLCDB", "VFPSO", &[(2, 3), (3, 8), (4, 0)], UNI.with(since_zs(7))),
    Mnemonic::new("WFLCSB", "VFPSO", &[(2, 2), (3, 8), (4, 0)], UNI.with(since_zs(8))),
    Mnemonic::new("WFLCXB", "VFPSO", &[(2, 4), (3, 8), (4, 0)], UNI.with(since_zs(8))),
    Mnemonic::new("WFLLD", "VFLL", &[(2, 3), (3, 8)], UNI.with(since_zs(8))),
    Mnemonic::new("WFLLS", "VFLL", &[(2, 2), (3, 8)], UNI.with(since_zs(8))),
    Mnemonic::new("WFLNDB", "VFPSO", &[(2, 3), (3, 8), (4, 1)], UNI.with(since_zs(7))),
    Mnemonic::new("WFLNSB", "VFPSO", &[(2, 2), (3, 8), (4, 1)], UNI.with(since_zs(8))),
    Mnemonic::new("WFLNXB", "VFPSO", &[(2, 4), (3, 8), (4, 1)], UNI.with(since_zs(8))),
    Mnemonic::new("WFLPDB", "VFPSO", &[(2, 3), (3, 8), (4, 2)], UNI.with(since_zs(7))),
    Mnemonic::new("WFLPSB", "VFPSO", &[(2, 2), (3, 8), (4, 2)], UNI.with(since_zs(8))),
    Mnemonic::new("WFLPXB", "VFPSO", &[(2, 4), (3, 8), (4, 2)], UNI.with(since_zs(8))),
    Mnemonic::new("WFLRD", "VFLR", &[(2, 3)], UNI.with(since_zs(8))),
    Mnemonic::new("WFLRX", "VFLR", &[(2, 4)], UNI.with(since_zs(8))),
    Mnemonic::new("WFMADB", "VFMA", &[(4, 8), (5, 3)], UNI.with(since_zs(7))),
    Mnemonic::new("WFMASB", "VFMA", &[(4, 8), (5, 2)], UNI.with(since_zs(8))),
    Mnemonic::new("WFMAXB", "VFMA", &[(4, 8), (5, 4)], UNI.with(since_zs(8))),
    Mnemonic::new("WFMAXDB", "VFMAX", &[(3, 3), (4, 8)], UNI.with(since_zs(8))),
    Mnemonic::new("WFMAXSB", "VFMAX", &[(3, 2), (4, 8)], UNI.with(since_zs(8))),
    Mnemonic::new("WFMAXXB", "VFMAX", &[(3, 4), (4, 8)], UNI.with(since_zs(8))),
    Mnemonic::new("WFMDB", "VFM", &[(3, 3), (4, 8)], UNI.with(since_zs(7))),
    Mnemonic::new("WFMINDB", "VFMIN", &[(3, 3), (4, 8)], UNI.with(since_zs(8))),
    Mnemonic::new("WFMINSB", "VFMIN", &[(3, 2), (4, 8)], UNI.with(since_zs(8))),
    Mnemonic::new("WFMINXB", "VFMIN", &[(3, 4), (4, 8)], UNI.with(since_zs(8))),
    Mnemonic::new("WFMSB", "VFM", &[(3, 2), (4, 8)], UNI.with(since_zs(8))),
    Mnemonic::new("WFMSDB", "VFMS", &[(4, 8), (5, 3)], UNI.with(since_zs(7))),
    Mnemonic::new("WFMSSB", "VFMS", &[(4, 8), (5, 2)], UNI.with(since_zs(8))),
    Mnemonic::new("WFMSXB", "VFMS", &[(4, 8), (5, 4)], UNI.with(since_zs(8))),
    Mnemonic::new("WFMXB", "VFM", &[(3, 4), (4, 8)], UNI.with(since_zs(8))),
    Mnemonic::new("WFNMADB", "VFNMA", &[(4, 8), (5, 3)], UNI.with(since_zs(8))),
    Mnemonic::new("WFNMASB", "VFNMA", &[(4, 8), (5, 2)], UNI.with(since_zs(8))),
    Mnemonic::new("WFNMAXB", "VFNMA", &[(4, 8), (5, 4)], UNI.with(since_zs(8))),
    Mnemonic::new("WFNMSDB", "VFNMS", &[(4, 8), (5, 3)], UNI.with(since_zs(8))),
    Mnemonic::new("WFNMSSB", "VFNMS", &[(4, 8), (5, 2)], UNI.with(since_zs(8))),
    Mnemonic::new("WFNMSXB", "VFNMS", &[(4, 8), (5, 4)], UNI.with(since_zs(8))),
    Mnemonic::new("WFPSODB", "VFPSO", &[(2, 3), (3, 8)], UNI.with(since_zs(7))),
    Mnemonic::new("WFPSOSB", "VFPSO", &[(2, 2), (3, 8)], UNI.with(since_zs(8))),
    Mnemonic::new("WFPSOXB", "VFPSO", &[(2, 4), (3, 8)], UNI.with(since_zs(8))),
    Mnemonic::new("WFSDB", "VFS", &[(2, 3), (3, 8)], UNI.with(since_zs(7))),
    Mnemonic::new("WFSQDB", "VFSQ", &[(2, 3), (3, 8)], UNI.with(since_zs(7))),
    Mnemonic::new("WFSQSB", "VFSQ", &[(2, 2), (3, 8)], UNI.with(since_zs(8))),
    Mnemonic::new("WFSQXB", "VFSQ", &[(2, 4), (3, 8)], UNI.with(since_zs(8))),
    Mnemonic::new("WFSSB", "VFS", &[(2, 2), (3, 8)], UNI.with(since_zs(8))),
    Mnemonic::new("WFSXB", "VFS", &[(2, 4), (3, 8)], UNI.with(since_zs(8))),
    Mnemonic::new("WFTCIDB", "VFTCI", &[(3, 3), (4, 8)], UNI.with(since_zs(7))),
    Mnemonic::new("WFTCISB", "VFTCI", &[(3, 2), (4, 8)], UNI.with(since_zs(8))),
    Mnemonic::new("WFTCIXB", "VFTCI", &[(3, 4), (4, 8)], UNI.with(since_zs(8))),
    Mnemonic::new("WLDEB", "VFLL", &[(2, 2), (3, 8)], UNI.with(since_zs(7))),
    Mnemonic::new("WLEDB", "VFLR", &[(2, 3)], UNI.with(since_zs(7))),
    Mnemonic::new("XHHR", "RXSBG", &[(2, 0), (3, 31)], UNI.with(since_zs(5))),
    Mnemonic::new("XHLR", "RXSBG", &[(2, 0), (3, 31), (4, 32)], UNI.with(since_zs(5))),
    Mnemonic::new("XLHR", "RXSBG", &[(2, 32), (3, 63), (4, 32)], UNI.with(since_zs(5))),
];
