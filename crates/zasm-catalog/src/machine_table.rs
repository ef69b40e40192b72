//! Static table of machine instructions and their format descriptors.
//!
//! Entries are kept strictly sorted by name so the catalog can use binary
//! search; the ordering and the mnemonic base references are verified by
//! tests in the crate root.

use crate::format::operand::*;
use crate::format::MachFormat;
use crate::support::{since_zs, DOS, ESA, UNI, UNKNOWN, XA, _370};
use crate::{InstructionFormat, MachineInstruction};

#[rustfmt::skip]
mod formats {
    use super::*;
    pub(super) const E_0: InstructionFormat = InstructionFormat { format: MachFormat::E, operands: &[] };
    pub(super) const I_1: InstructionFormat = InstructionFormat { format: MachFormat::I, operands: &[IMM_8_U] };
    pub(super) const IE_2: InstructionFormat = InstructionFormat { format: MachFormat::IE, operands: &[IMM_4_U, IMM_4_U] };
    pub(super) const MII_3: InstructionFormat = InstructionFormat { format: MachFormat::MII, operands: &[MASK_4_U, REL_ADDR_IMM_12_S, REL_ADDR_IMM_24_S] };
    pub(super) const RI_A_2_S: InstructionFormat = InstructionFormat { format: MachFormat::RI_a, operands: &[REG_4_U, IMM_16_S] };
    pub(super) const RI_A_2_U: InstructionFormat = InstructionFormat { format: MachFormat::RI_a, operands: &[REG_4_U, IMM_16_U] };
    pub(super) const RI_B_2: InstructionFormat = InstructionFormat { format: MachFormat::RI_b, operands: &[REG_4_U, REL_ADDR_IMM_16_S] };
    pub(super) const RI_C_2: InstructionFormat = InstructionFormat { format: MachFormat::RI_c, operands: &[MASK_4_U, REL_ADDR_IMM_16_S] };
    pub(super) const RIE_A_3: InstructionFormat = InstructionFormat { format: MachFormat::RIE_a, operands: &[REG_4_U, IMM_16_S, MASK_4_U] };
    pub(super) const RIE_B_4: InstructionFormat = InstructionFormat { format: MachFormat::RIE_b, operands: &[REG_4_U, REG_4_U, MASK_4_U, REL_ADDR_IMM_16_S] };
    pub(super) const RIE_C_4: InstructionFormat = InstructionFormat { format: MachFormat::RIE_c, operands: &[REG_4_U, IMM_8_S, MASK_4_U, REL_ADDR_IMM_16_S] };
    pub(super) const RIE_D_3: InstructionFormat = InstructionFormat { format: MachFormat::RIE_d, operands: &[REG_4_U, REG_4_U, IMM_16_S] };
    pub(super) const RIE_E_3: InstructionFormat = InstructionFormat { format: MachFormat::RIE_e, operands: &[REG_4_U, REG_4_U, REL_ADDR_IMM_16_S] };
    pub(super) const RIE_F_5: InstructionFormat = InstructionFormat { format: MachFormat::RIE_f, operands: &[REG_4_U, REG_4_U, IMM_8_S, IMM_8_S, IMM_8_S_OPT] };
    pub(super) const RIE_G_3: InstructionFormat = InstructionFormat { format: MachFormat::RIE_g, operands: &[REG_4_U, IMM_16_S, MASK_4_U] };
    pub(super) const RIL_A_2: InstructionFormat = InstructionFormat { format: MachFormat::RIL_a, operands: &[REG_4_U, IMM_32_S] };
    pub(super) const RIL_B_2: InstructionFormat = InstructionFormat { format: MachFormat::RIL_b, operands: &[REG_4_U, REL_ADDR_IMM_32_S] };
    pub(super) const RIL_C_2: InstructionFormat = InstructionFormat { format: MachFormat::RIL_c, operands: &[MASK_4_U, REL_ADDR_IMM_32_S] };
    pub(super) const RIS_4: InstructionFormat = InstructionFormat { format: MachFormat::RIS, operands: &[REG_4_U, IMM_8_S, MASK_4_U, DB_12_4_U] };
    pub(super) const RR_1: InstructionFormat = InstructionFormat { format: MachFormat::RR, operands: &[REG_4_U] };
    pub(super) const RR_2_M: InstructionFormat = InstructionFormat { format: MachFormat::RR, operands: &[MASK_4_U, REG_4_U] };
    pub(super) const RR_2: InstructionFormat = InstructionFormat { format: MachFormat::RR, operands: &[REG_4_U, REG_4_U] };
    pub(super) const RRD_3: InstructionFormat = InstructionFormat { format: MachFormat::RRD, operands: &[REG_4_U, REG_4_U, REG_4_U] };
    pub(super) const RRE_0: InstructionFormat = InstructionFormat { format: MachFormat::RRE, operands: &[] };
    pub(super) const RRE_1: InstructionFormat = InstructionFormat { format: MachFormat::RRE, operands: &[REG_4_U] };
    pub(super) const RRE_2: InstructionFormat = InstructionFormat { format: MachFormat::RRE, operands: &[REG_4_U, REG_4_U] };
    pub(super) const RRF_A_3: InstructionFormat = InstructionFormat { format: MachFormat::RRF_a, operands: &[REG_4_U, REG_4_U, REG_4_U] };
    pub(super) const RRF_A_4: InstructionFormat = InstructionFormat { format: MachFormat::RRF_a, operands: &[REG_4_U, REG_4_U, REG_4_U, MASK_4_U] };
    pub(super) const RRF_A_4_OPT: InstructionFormat = InstructionFormat { format: MachFormat::RRF_a, operands: &[REG_4_U, REG_4_U, REG_4_U_OPT, MASK_4_U_OPT] };
    pub(super) const RRF_B_3: InstructionFormat = InstructionFormat { format: MachFormat::RRF_b, operands: &[REG_4_U, REG_4_U, REG_4_U] };
    pub(super) const RRF_B_4: InstructionFormat = InstructionFormat { format: MachFormat::RRF_b, operands: &[REG_4_U, REG_4_U, REG_4_U, MASK_4_U] };
    pub(super) const RRF_B_4_OPT: InstructionFormat = InstructionFormat { format: MachFormat::RRF_b, operands: &[REG_4_U, REG_4_U, REG_4_U, MASK_4_U_OPT] };
    pub(super) const RRF_C_3: InstructionFormat = InstructionFormat { format: MachFormat::RRF_c, operands: &[REG_4_U, REG_4_U, MASK_4_U] };
    pub(super) const RRF_C_3_OPT: InstructionFormat = InstructionFormat { format: MachFormat::RRF_c, operands: &[REG_4_U, REG_4_U, MASK_4_U_OPT] };
    pub(super) const RRF_D_3: InstructionFormat = InstructionFormat { format: MachFormat::RRF_d, operands: &[REG_4_U, REG_4_U, MASK_4_U] };
    pub(super) const RRF_E_3: InstructionFormat = InstructionFormat { format: MachFormat::RRF_e, operands: &[REG_4_U, MASK_4_U, REG_4_U] };
    pub(super) const RRF_E_4: InstructionFormat = InstructionFormat { format: MachFormat::RRF_e, operands: &[REG_4_U, MASK_4_U, REG_4_U, MASK_4_U] };
    pub(super) const RRS_4: InstructionFormat = InstructionFormat { format: MachFormat::RRS, operands: &[REG_4_U, REG_4_U, MASK_4_U, DB_12_4_U] };
    pub(super) const RS_A_2: InstructionFormat = InstructionFormat { format: MachFormat::RS_a, operands: &[REG_4_U, DB_12_4_U] };
    pub(super) const RS_A_3: InstructionFormat = InstructionFormat { format: MachFormat::RS_a, operands: &[REG_4_U, REG_4_U, DB_12_4_U] };
    pub(super) const RS_B_3: InstructionFormat = InstructionFormat { format: MachFormat::RS_b, operands: &[REG_4_U, MASK_4_U, DB_12_4_U] };
    pub(super) const RSI_3: InstructionFormat = InstructionFormat { format: MachFormat::RSI, operands: &[REG_4_U, REG_4_U, REL_ADDR_IMM_16_S] };
    pub(super) const RSL_A_1: InstructionFormat = InstructionFormat { format: MachFormat::RSL_a, operands: &[DB_12_4X4L_U] };
    pub(super) const RSL_B_3: InstructionFormat = InstructionFormat { format: MachFormat::RSL_b, operands: &[REG_4_U, DB_12_8X4L_U, MASK_4_U] };
    pub(super) const RSY_A_3: InstructionFormat = InstructionFormat { format: MachFormat::RSY_a, operands: &[REG_4_U, REG_4_U, DB_20_4_S] };
    pub(super) const RSY_B_3_SU: InstructionFormat = InstructionFormat { format: MachFormat::RSY_b, operands: &[REG_4_U, DB_20_4_S, MASK_4_U] };
    pub(super) const RSY_B_3_US: InstructionFormat = InstructionFormat { format: MachFormat::RSY_b, operands: &[REG_4_U, MASK_4_U, DB_20_4_S] };
    pub(super) const RSY_B_3_UX: InstructionFormat = InstructionFormat { format: MachFormat::RSY_b, operands: &[REG_4_U, MASK_4_U, DXB_20_4X4_S] };
    pub(super) const RX_A_2_UX: InstructionFormat = InstructionFormat { format: MachFormat::RX_a, operands: &[REG_4_U, DXB_12_4X4_U] };
    pub(super) const RX_A_2: InstructionFormat = InstructionFormat { format: MachFormat::RX_a, operands: &[REG_4_U, REG_4_U] };
    pub(super) const RX_B_2: InstructionFormat = InstructionFormat { format: MachFormat::RX_b, operands: &[MASK_4_U, DXB_12_4X4_U] };
    pub(super) const RXE_2: InstructionFormat = InstructionFormat { format: MachFormat::RXE, operands: &[REG_4_U, DXB_12_4X4_U] };
    pub(super) const RXE_3_XM: InstructionFormat = InstructionFormat { format: MachFormat::RXE, operands: &[REG_4_U, DXB_12_4X4_U, MASK_4_U] };
    pub(super) const RXF_3_X: InstructionFormat = InstructionFormat { format: MachFormat::RXF, operands: &[REG_4_U, REG_4_U, DXB_12_4X4_U] };
    pub(super) const RXY_A_2: InstructionFormat = InstructionFormat { format: MachFormat::RXY_a, operands: &[REG_4_U, DXB_20_4X4_S] };
    pub(super) const RXY_B_2: InstructionFormat = InstructionFormat { format: MachFormat::RXY_b, operands: &[MASK_4_U, DXB_20_4X4_S] };
    pub(super) const S_0: InstructionFormat = InstructionFormat { format: MachFormat::S, operands: &[] };
    pub(super) const S_1_U: InstructionFormat = InstructionFormat { format: MachFormat::S, operands: &[DB_12_4_U] };
    pub(super) const S_1_S: InstructionFormat = InstructionFormat { format: MachFormat::S, operands: &[DB_20_4_S] };
    pub(super) const SI_1: InstructionFormat = InstructionFormat { format: MachFormat::SI, operands: &[DB_12_4_U] };
    pub(super) const SI_2_S: InstructionFormat = InstructionFormat { format: MachFormat::SI, operands: &[DB_12_4_U, IMM_8_S] };
    pub(super) const SI_2_U: InstructionFormat = InstructionFormat { format: MachFormat::SI, operands: &[DB_12_4_U, IMM_8_U] };
    pub(super) const SIL_2_S: InstructionFormat = InstructionFormat { format: MachFormat::SIL, operands: &[DB_12_4_U, IMM_16_S] };
    pub(super) const SIL_2_U: InstructionFormat = InstructionFormat { format: MachFormat::SIL, operands: &[DB_12_4_U, IMM_16_U] };
    pub(super) const SIY_2_SS: InstructionFormat = InstructionFormat { format: MachFormat::SIY, operands: &[DB_20_4_S, IMM_8_S] };
    pub(super) const SIY_2_SU: InstructionFormat = InstructionFormat { format: MachFormat::SIY, operands: &[DB_20_4_S, IMM_8_U] };
    pub(super) const SMI_3: InstructionFormat = InstructionFormat { format: MachFormat::SMI, operands: &[MASK_4_U, REL_ADDR_IMM_16_S, DB_12_4_U] };
    pub(super) const SS_A_2_U: InstructionFormat = InstructionFormat { format: MachFormat::SS_a, operands: &[DB_12_8X4L_U, DB_12_4_U] };
    pub(super) const SS_A_2_S: InstructionFormat = InstructionFormat { format: MachFormat::SS_a, operands: &[DB_12_8X4L_U, DB_20_4_S] };
    pub(super) const SS_B_2: InstructionFormat = InstructionFormat { format: MachFormat::SS_b, operands: &[DB_12_4X4L_U, DB_12_4X4L_U] };
    pub(super) const SS_C_3: InstructionFormat = InstructionFormat { format: MachFormat::SS_c, operands: &[DB_12_4X4L_U, DB_12_4_U, IMM_4_U] };
    pub(super) const SS_D_3: InstructionFormat = InstructionFormat { format: MachFormat::SS_d, operands: &[DRB_12_4X4_U, DB_12_4_U, REG_4_U] };
    pub(super) const SS_E_4_BR: InstructionFormat = InstructionFormat { format: MachFormat::SS_e, operands: &[REG_4_U, DB_12_4_U, REG_4_U, DB_12_4_U] };
    pub(super) const SS_E_4_RB: InstructionFormat = InstructionFormat { format: MachFormat::SS_e, operands: &[REG_4_U, REG_4_U, DB_12_4_U, DB_12_4_U] };
    pub(super) const SS_F_2: InstructionFormat = InstructionFormat { format: MachFormat::SS_f, operands: &[DB_12_4_U, DB_12_8X4L_U] };
    pub(super) const SSE_2: InstructionFormat = InstructionFormat { format: MachFormat::SSE, operands: &[DB_12_4_U, DB_12_4_U] };
    pub(super) const SSF_3_DR: InstructionFormat = InstructionFormat { format: MachFormat::SSF, operands: &[DB_12_4_U, DB_12_4_U, REG_4_U] };
    pub(super) const SSF_3_RD: InstructionFormat = InstructionFormat { format: MachFormat::SSF, operands: &[REG_4_U, DB_12_4_U, DB_12_4_U] };
    pub(super) const VRI_A_2: InstructionFormat = InstructionFormat { format: MachFormat::VRI_a, operands: &[VEC_REG_5_U, IMM_16_U] };
    pub(super) const VRI_A_3: InstructionFormat = InstructionFormat { format: MachFormat::VRI_a, operands: &[VEC_REG_5_U, IMM_16_S, MASK_4_U] };
    pub(super) const VRI_B_4: InstructionFormat = InstructionFormat { format: MachFormat::VRI_b, operands: &[VEC_REG_5_U, IMM_8_U, IMM_8_U, MASK_4_U] };
    pub(super) const VRI_C_4: InstructionFormat = InstructionFormat { format: MachFormat::VRI_c, operands: &[VEC_REG_5_U, VEC_REG_5_U, IMM_16_U, MASK_4_U] };
    pub(super) const VRI_D_4: InstructionFormat = InstructionFormat { format: MachFormat::VRI_d, operands: &[VEC_REG_5_U, VEC_REG_5_U, VEC_REG_5_U, IMM_8_U] };
    pub(super) const VRI_D_5: InstructionFormat = InstructionFormat { format: MachFormat::VRI_d, operands: &[VEC_REG_5_U, VEC_REG_5_U, VEC_REG_5_U, IMM_8_U, MASK_4_U] };
    pub(super) const VRI_E_5: InstructionFormat = InstructionFormat { format: MachFormat::VRI_e, operands: &[VEC_REG_5_U, VEC_REG_5_U, IMM_12_S, MASK_4_U, MASK_4_U] };
    pub(super) const VRI_F_5: InstructionFormat = InstructionFormat { format: MachFormat::VRI_f, operands: &[VEC_REG_5_U, VEC_REG_5_U, VEC_REG_5_U, IMM_8_U, MASK_4_U] };
    pub(super) const VRI_G_5_S: InstructionFormat = InstructionFormat { format: MachFormat::VRI_g, operands: &[VEC_REG_5_U, VEC_REG_5_U, IMM_8_U, IMM_8_S, MASK_4_U] };
    pub(super) const VRI_G_5_U: InstructionFormat = InstructionFormat { format: MachFormat::VRI_g, operands: &[VEC_REG_5_U, VEC_REG_5_U, IMM_8_U, IMM_8_U, MASK_4_U] };
    pub(super) const VRI_H_3: InstructionFormat = InstructionFormat { format: MachFormat::VRI_h, operands: &[VEC_REG_5_U, IMM_16_S, IMM_4_U] };
    pub(super) const VRI_I_4: InstructionFormat = InstructionFormat { format: MachFormat::VRI_i, operands: &[VEC_REG_5_U, REG_4_U, IMM_8_S, MASK_4_U] };
    pub(super) const VRR_A_2: InstructionFormat = InstructionFormat { format: MachFormat::VRR_a, operands: &[VEC_REG_5_U, VEC_REG_5_U] };
    pub(super) const VRR_A_3: InstructionFormat = InstructionFormat { format: MachFormat::VRR_a, operands: &[VEC_REG_5_U, VEC_REG_5_U, MASK_4_U] };
    pub(super) const VRR_A_4: InstructionFormat = InstructionFormat { format: MachFormat::VRR_a, operands: &[VEC_REG_5_U, VEC_REG_5_U, MASK_4_U, MASK_4_U] };
    pub(super) const VRR_A_4_OPT: InstructionFormat = InstructionFormat { format: MachFormat::VRR_a, operands: &[VEC_REG_5_U, VEC_REG_5_U, MASK_4_U, MASK_4_U_OPT] };
    pub(super) const VRR_A_5: InstructionFormat = InstructionFormat { format: MachFormat::VRR_a, operands: &[VEC_REG_5_U, VEC_REG_5_U, MASK_4_U, MASK_4_U, MASK_4_U] };
    pub(super) const VRR_B_5: InstructionFormat = InstructionFormat { format: MachFormat::VRR_b, operands: &[VEC_REG_5_U, VEC_REG_5_U, VEC_REG_5_U, MASK_4_U, MASK_4_U] };
    pub(super) const VRR_B_5_OPT: InstructionFormat = InstructionFormat { format: MachFormat::VRR_b, operands: &[VEC_REG_5_U, VEC_REG_5_U, VEC_REG_5_U, MASK_4_U, MASK_4_U_OPT] };
    pub(super) const VRR_C_3: InstructionFormat = InstructionFormat { format: MachFormat::VRR_c, operands: &[VEC_REG_5_U, VEC_REG_5_U, VEC_REG_5_U] };
    pub(super) const VRR_C_4: InstructionFormat = InstructionFormat { format: MachFormat::VRR_c, operands: &[VEC_REG_5_U, VEC_REG_5_U, VEC_REG_5_U, MASK_4_U] };
    pub(super) const VRR_C_5: InstructionFormat = InstructionFormat { format: MachFormat::VRR_c, operands: &[VEC_REG_5_U, VEC_REG_5_U, VEC_REG_5_U, MASK_4_U, MASK_4_U] };
    pub(super) const VRR_C_6: InstructionFormat = InstructionFormat { format: MachFormat::VRR_c, operands: &[VEC_REG_5_U, VEC_REG_5_U, VEC_REG_5_U, MASK_4_U, MASK_4_U, MASK_4_U] };
    pub(super) const VRR_D_5: InstructionFormat = InstructionFormat { format: MachFormat::VRR_d, operands: &[VEC_REG_5_U, VEC_REG_5_U, VEC_REG_5_U, VEC_REG_5_U, MASK_4_U] };
    pub(super) const VRR_D_6: InstructionFormat = InstructionFormat { format: MachFormat::VRR_d, operands: &[VEC_REG_5_U, VEC_REG_5_U, VEC_REG_5_U, VEC_REG_5_U, MASK_4_U, MASK_4_U] };
    pub(super) const VRR_D_6_OPT: InstructionFormat = InstructionFormat { format: MachFormat::VRR_d, operands: &[VEC_REG_5_U, VEC_REG_5_U, VEC_REG_5_U, VEC_REG_5_U, MASK_4_U, MASK_4_U_OPT] };
    pub(super) const VRR_E_4: InstructionFormat = InstructionFormat { format: MachFormat::VRR_e, operands: &[VEC_REG_5_U, VEC_REG_5_U, VEC_REG_5_U, VEC_REG_5_U] };
    pub(super) const VRR_E_6: InstructionFormat = InstructionFormat { format: MachFormat::VRR_e, operands: &[VEC_REG_5_U, VEC_REG_5_U, VEC_REG_5_U, VEC_REG_5_U, MASK_4_U, MASK_4_U] };
    pub(super) const VRR_F_3: InstructionFormat = InstructionFormat { format: MachFormat::VRR_f, operands: &[VEC_REG_5_U, REG_4_U, REG_4_U] };
    pub(super) const VRR_G_1: InstructionFormat = InstructionFormat { format: MachFormat::VRR_g, operands: &[VEC_REG_5_U] };
    pub(super) const VRR_H_3: InstructionFormat = InstructionFormat { format: MachFormat::VRR_h, operands: &[VEC_REG_5_U, VEC_REG_5_U, MASK_4_U] };
    pub(super) const VRR_I_3: InstructionFormat = InstructionFormat { format: MachFormat::VRR_i, operands: &[REG_4_U, VEC_REG_5_U, MASK_4_U] };
    pub(super) const VRS_A_4: InstructionFormat = InstructionFormat { format: MachFormat::VRS_a, operands: &[VEC_REG_5_U, VEC_REG_5_U, DB_12_4_U, MASK_4_U] };
    pub(super) const VRS_A_4_OPT: InstructionFormat = InstructionFormat { format: MachFormat::VRS_a, operands: &[VEC_REG_5_U, VEC_REG_5_U, DB_12_4_U, MASK_4_U_OPT] };
    pub(super) const VRS_B_3: InstructionFormat = InstructionFormat { format: MachFormat::VRS_b, operands: &[VEC_REG_5_U, REG_4_U, DB_12_4_U] };
    pub(super) const VRS_B_4: InstructionFormat = InstructionFormat { format: MachFormat::VRS_b, operands: &[VEC_REG_5_U, REG_4_U, DB_12_4_U, MASK_4_U] };
    pub(super) const VRS_C_4: InstructionFormat = InstructionFormat { format: MachFormat::VRS_c, operands: &[REG_4_U, VEC_REG_5_U, DB_12_4_U, MASK_4_U] };
    pub(super) const VRS_D_3: InstructionFormat = InstructionFormat { format: MachFormat::VRS_d, operands: &[VEC_REG_5_U, REG_4_U, DB_12_4_U] };
    pub(super) const VRV_3: InstructionFormat = InstructionFormat { format: MachFormat::VRV, operands: &[VEC_REG_5_U, DVB_12_5X4_U, MASK_4_U] };
    pub(super) const VRX_3: InstructionFormat = InstructionFormat { format: MachFormat::VRX, operands: &[VEC_REG_5_U, DXB_12_4X4_U, MASK_4_U] };
    pub(super) const VRX_3_OPT: InstructionFormat = InstructionFormat { format: MachFormat::VRX, operands: &[VEC_REG_5_U, DXB_12_4X4_U, MASK_4_U_OPT] };
    pub(super) const VSI_3: InstructionFormat = InstructionFormat { format: MachFormat::VSI, operands: &[VEC_REG_5_U, DB_12_4_U, IMM_8_U] };
}
use formats::*;

#[rustfmt::skip]
pub(crate) const MACHINE_INSTRUCTIONS: &[MachineInstruction] = &[
    MachineInstruction::new("A", &RX_A_2_UX, 510, UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    MachineInstruction::new("AD", &RX_A_2_UX, 1412, UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    MachineInstruction::new("ADB", &RXE_2, 1445, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("ADBR", &RRE_2, 1445, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("ADDFRR", &RRE_2, 7, UNKNOWN),
    MachineInstruction::new("ADR", &RR_2, 1412, UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    MachineInstruction::new("ADTR", &RRF_A_3, 1491, UNI.with(since_zs(3))),
    MachineInstruction::new("ADTRA", &RRF_A_4, 1491, UNI.with(since_zs(5))),
    MachineInstruction::new("AE", &RX_A_2_UX, 1412, UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    MachineInstruction::new("AEB", &RXE_2, 1445, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("AEBR", &RRE_2, 1445, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("AER", &RR_2, 1412, UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    MachineInstruction::new("AFI", &RIL_A_2, 511, UNI.with(since_zs(3))),
    MachineInstruction::new("AG", &RXY_A_2, 511, UNI.with(since_zs(1))),
    MachineInstruction::new("AGF", &RXY_A_2, 511, UNI.with(since_zs(1))),
    MachineInstruction::new("AGFI", &RIL_A_2, 511, UNI.with(since_zs(3))),
    MachineInstruction::new("AGFR", &RRE_2, 510, UNI.with(since_zs(1))),
    MachineInstruction::new("AGH", &RXY_A_2, 512, UNI.with(since_zs(8))),
    MachineInstruction::new("AGHI", &RI_A_2_S, 513, UNI.with(since_zs(1))),
    MachineInstruction::new("AGHIK", &RIE_D_3, 511, UNI.with(since_zs(5))),
    MachineInstruction::new("AGR", &RRE_2, 510, UNI.with(since_zs(1))),
    MachineInstruction::new("AGRK", &RRF_A_3, 510, UNI.with(since_zs(5))),
    MachineInstruction::new("AGSI", &SIY_2_SS, 511, UNI.with(since_zs(4))),
    MachineInstruction::new("AH", &RX_A_2_UX, 512, UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    MachineInstruction::new("AHHHR", &RRF_A_3, 513, UNI.with(since_zs(5))),
    MachineInstruction::new("AHHLR", &RRF_A_3, 513, UNI.with(since_zs(5))),
    MachineInstruction::new("AHI", &RI_A_2_S, 512, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("AHIK", &RIE_D_3, 511, UNI.with(since_zs(5))),
    MachineInstruction::new("AHY", &RXY_A_2, 512, UNI.with(since_zs(2))),
    MachineInstruction::new("AIH", &RIL_A_2, 513, UNI.with(since_zs(5))),
    MachineInstruction::new("AL", &RX_A_2_UX, 514, UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    MachineInstruction::new("ALC", &RXY_A_2, 515, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("ALCG", &RXY_A_2, 515, UNI.with(since_zs(1))),
    MachineInstruction::new("ALCGR", &RRE_2, 515, UNI.with(since_zs(1))),
    MachineInstruction::new("ALCR", &RRE_2, 515, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("ALFI", &RIL_A_2, 514, UNI.with(since_zs(3))),
    MachineInstruction::new("ALG", &RXY_A_2, 514, UNI.with(since_zs(1))),
    MachineInstruction::new("ALGF", &RXY_A_2, 514, UNI.with(since_zs(1))),
    MachineInstruction::new("ALGFI", &RIL_A_2, 514, UNI.with(since_zs(3))),
    MachineInstruction::new("ALGFR", &RRE_2, 514, UNI.with(since_zs(1))),
    MachineInstruction::new("ALGHSIK", &RIE_D_3, 516, UNI.with(since_zs(5))),
    MachineInstruction::new("ALGR", &RRE_2, 514, UNI.with(since_zs(1))),
    MachineInstruction::new("ALGRK", &RRF_A_3, 514, UNI.with(since_zs(5))),
    MachineInstruction::new("ALGSI", &SIY_2_SS, 516, UNI.with(since_zs(4))),
    MachineInstruction::new("ALHHHR", &RRF_A_3, 515, UNI.with(since_zs(5))),
    MachineInstruction::new("ALHHLR", &RRF_A_3, 515, UNI.with(since_zs(5))),
    MachineInstruction::new("ALHSIK", &RIE_D_3, 516, UNI.with(since_zs(5))),
    MachineInstruction::new("ALR", &RR_2, 514, UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    MachineInstruction::new("ALRK", &RRF_A_3, 514, UNI.with(since_zs(5))),
    MachineInstruction::new("ALSI", &SIY_2_SS, 516, UNI.with(since_zs(4))),
    MachineInstruction::new("ALSIH", &RIL_A_2, 517, UNI.with(since_zs(5))),
    MachineInstruction::new("ALSIHN", &RIL_A_2, 517, UNI.with(since_zs(5))),
    MachineInstruction::new("ALY", &RXY_A_2, 514, UNI.with(since_zs(2))),
    MachineInstruction::new("AP", &SS_B_2, 920, UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    MachineInstruction::new("AR", &RR_2, 510, UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    MachineInstruction::new("ARK", &RRF_A_3, 510, UNI.with(since_zs(5))),
    MachineInstruction::new("ASI", &SIY_2_SS, 511, UNI.with(since_zs(4))),
    MachineInstruction::new("AU", &RX_A_2_UX, 1413, UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    MachineInstruction::new("AUR", &RR_2, 1413, UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    MachineInstruction::new("AW", &RX_A_2_UX, 1413, UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    MachineInstruction::new("AWR", &RR_2, 1413, UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    MachineInstruction::new("AXBR", &RRE_2, 1445, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("AXR", &RR_2, 1412, UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    MachineInstruction::new("AXTR", &RRF_A_3, 1491, UNI.with(since_zs(3))),
    MachineInstruction::new("AXTRA", &RRF_A_4, 1491, UNI.with(since_zs(5))),
    MachineInstruction::new("AY", &RXY_A_2, 511, UNI.with(since_zs(2))),
    MachineInstruction::new("BAKR", &RRE_2, 993, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("BAL", &RX_A_2_UX, 519, UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    MachineInstruction::new("BALR", &RR_2, 519, UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    MachineInstruction::new("BAS", &RX_A_2_UX, 520, UNI.with(ESA).with(XA).with(_370).with(since_zs(1))),
    MachineInstruction::new("BASR", &RR_2, 520, UNI.with(ESA).with(XA).with(_370).with(since_zs(1))),
    MachineInstruction::new("BASSM", &RX_A_2, 520, UNI.with(ESA).with(XA).with(since_zs(1))),
    MachineInstruction::new("BC", &RX_B_2, 524, UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    MachineInstruction::new("BCR", &RR_2_M, 524, UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    MachineInstruction::new("BCT", &RX_A_2_UX, 525, UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    MachineInstruction::new("BCTG", &RXY_A_2, 525, UNI.with(since_zs(1))),
    MachineInstruction::new("BCTGR", &RRE_2, 525, UNI.with(since_zs(1))),
    MachineInstruction::new("BCTR", &RR_2, 525, UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    MachineInstruction::new("BIC", &RXY_B_2, 523, UNI.with(since_zs(8))),
    MachineInstruction::new("BPP", &SMI_3, 527, UNI.with(since_zs(6))),
    MachineInstruction::new("BPRP", &MII_3, 527, UNI.with(since_zs(6))),
    MachineInstruction::new("BRAS", &RI_B_2, 530, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("BRASL", &RIL_B_2, 530, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("BRC", &RI_C_2, 530, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("BRCL", &RIL_C_2, 530, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("BRCT", &RI_B_2, 531, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("BRCTG", &RI_B_2, 531, UNI.with(since_zs(1))),
    MachineInstruction::new("BRCTH", &RIL_B_2, 531, UNI.with(since_zs(5))),
    MachineInstruction::new("BRXH", &RSI_3, 532, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("BRXHG", &RIE_E_3, 532, UNI.with(since_zs(1))),
    MachineInstruction::new("BRXLE", &RSI_3, 532, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("BRXLG", &RIE_E_3, 532, UNI.with(since_zs(1))),
    MachineInstruction::new("BSA", &RRE_2, 989, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("BSG", &RRE_2, 995, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("BSM", &RR_2, 522, UNI.with(ESA).with(XA).with(since_zs(1))),
    MachineInstruction::new("BXH", &RS_A_3, 526, UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    MachineInstruction::new("BXHG", &RSY_A_3, 526, UNI.with(since_zs(1))),
    MachineInstruction::new("BXLE", &RS_A_3, 526, UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    MachineInstruction::new("BXLEG", &RSY_A_3, 526, UNI.with(since_zs(1))),
    MachineInstruction::new("C", &RX_A_2_UX, 618, UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    MachineInstruction::new("CD", &RX_A_2_UX, 1414, UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    MachineInstruction::new("CDB", &RXE_2, 1447, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("CDBR", &RRE_2, 1447, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("CDFBR", &RRE_2, 1449, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("CDFBRA", &RRF_E_4, 1449, UNI.with(since_zs(5))),
    MachineInstruction::new("CDFR", &RRE_2, 1415, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("CDFTR", &RRF_E_4, 1496, UNI.with(since_zs(5))),
    MachineInstruction::new("CDGBR", &RRE_2, 1449, UNI.with(since_zs(1))),
    MachineInstruction::new("CDGBRA", &RRF_E_4, 1449, UNI.with(since_zs(5))),
    MachineInstruction::new("CDGR", &RRE_2, 1415, UNI.with(since_zs(1))),
    MachineInstruction::new("CDGTR", &RRE_2, 1496, UNI.with(since_zs(3))),
    MachineInstruction::new("CDGTRA", &RRF_E_4, 1496, UNI.with(since_zs(5))),
    MachineInstruction::new("CDLFBR", &RRF_E_4, 1451, UNI.with(since_zs(5))),
    MachineInstruction::new("CDLFTR", &RRF_E_4, 1497, UNI.with(since_zs(5))),
    MachineInstruction::new("CDLGBR", &RRF_E_4, 1451, UNI.with(since_zs(5))),
    MachineInstruction::new("CDLGTR", &RRF_E_4, 1497, UNI.with(since_zs(5))),
    MachineInstruction::new("CDPT", &RSL_B_3, 1498, UNI.with(since_zs(7))),
    MachineInstruction::new("CDR", &RR_2, 1414, UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    MachineInstruction::new("CDS", &RS_A_3, 628, UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    MachineInstruction::new("CDSG", &RSY_A_3, 628, UNI.with(since_zs(1))),
    MachineInstruction::new("CDSTR", &RRE_2, 1500, UNI.with(since_zs(3))),
    MachineInstruction::new("CDSY", &RSY_A_3, 628, UNI.with(since_zs(2))),
    MachineInstruction::new("CDTR", &RRE_2, 1494, UNI.with(since_zs(3))),
    MachineInstruction::new("CDUTR", &RRE_2, 1500, UNI.with(since_zs(3))),
    MachineInstruction::new("CDZT", &RSL_B_3, 1501, UNI.with(since_zs(6))),
    MachineInstruction::new("CE", &RX_A_2_UX, 1414, UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    MachineInstruction::new("CEB", &RXE_2, 1447, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("CEBR", &RRE_2, 1447, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("CEDTR", &RRE_2, 1495, UNI.with(since_zs(3))),
    MachineInstruction::new("CEFBR", &RRE_2, 1449, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("CEFBRA", &RRF_E_4, 1449, UNI.with(since_zs(5))),
    MachineInstruction::new("CEFR", &RRE_2, 1415, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("CEGBR", &RRE_2, 1449, UNI.with(since_zs(1))),
    MachineInstruction::new("CEGBRA", &RRF_E_4, 1449, UNI.with(since_zs(5))),
    MachineInstruction::new("CEGR", &RRE_2, 1415, UNI.with(since_zs(1))),
    MachineInstruction::new("CELFBR", &RRF_E_4, 1451, UNI.with(since_zs(5))),
    MachineInstruction::new("CELGBR", &RRF_E_4, 1451, UNI.with(since_zs(5))),
    MachineInstruction::new("CER", &RR_2, 1414, UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    MachineInstruction::new("CEXTR", &RRE_2, 1495, UNI.with(since_zs(3))),
    MachineInstruction::new("CFC", &S_1_U, 621, UNI.with(ESA).with(XA).with(since_zs(1))),
    MachineInstruction::new("CFDBR", &RRF_E_3, 1452, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("CFDBRA", &RRF_E_4, 1452, UNI.with(since_zs(5))),
    MachineInstruction::new("CFDR", &RRF_E_3, 1415, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("CFDTR", &RRF_E_4, 1502, UNI.with(since_zs(5))),
    MachineInstruction::new("CFEBR", &RRF_E_3, 1452, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("CFEBRA", &RRF_E_4, 1452, UNI.with(since_zs(5))),
    MachineInstruction::new("CFER", &RRF_E_3, 1415, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("CFI", &RIL_A_2, 618, UNI.with(since_zs(3))),
    MachineInstruction::new("CFXBR", &RRF_E_3, 1452, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("CFXBRA", &RRF_E_4, 1452, UNI.with(since_zs(5))),
    MachineInstruction::new("CFXR", &RRF_E_3, 1415, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("CFXTR", &RRF_E_4, 1502, UNI.with(since_zs(5))),
    MachineInstruction::new("CG", &RXY_A_2, 618, UNI.with(since_zs(1))),
    MachineInstruction::new("CGDBR", &RRF_E_3, 1452, UNI.with(since_zs(1))),
    MachineInstruction::new("CGDBRA", &RRF_E_4, 1452, UNI.with(since_zs(5))),
    MachineInstruction::new("CGDR", &RRF_E_3, 1415, UNI.with(since_zs(1))),
    MachineInstruction::new("CGDTR", &RRF_E_3, 1501, UNI.with(since_zs(3))),
    MachineInstruction::new("CGDTRA", &RRF_E_4, 1502, UNI.with(since_zs(5))),
    MachineInstruction::new("CGEBR", &RRF_E_3, 1452, UNI.with(since_zs(1))),
    MachineInstruction::new("CGEBRA", &RRF_E_4, 1452, UNI.with(since_zs(5))),
    MachineInstruction::new("CGER", &RRF_E_3, 1415, UNI.with(since_zs(1))),
    MachineInstruction::new("CGF", &RXY_A_2, 618, UNI.with(since_zs(1))),
    MachineInstruction::new("CGFI", &RIL_A_2, 619, UNI.with(since_zs(3))),
    MachineInstruction::new("CGFR", &RRE_2, 618, UNI.with(since_zs(1))),
    MachineInstruction::new("CGFRL", &RIL_B_2, 619, UNI.with(since_zs(4))),
    MachineInstruction::new("CGH", &RXY_A_2, 634, UNI.with(since_zs(4))),
    MachineInstruction::new("CGHI", &RI_A_2_S, 634, UNI.with(since_zs(1))),
    MachineInstruction::new("CGHRL", &RIL_B_2, 634, UNI.with(since_zs(4))),
    MachineInstruction::new("CGHSI", &SIL_2_S, 634, UNI.with(since_zs(4))),
    MachineInstruction::new("CGIB", &RIS_4, 620, UNI.with(since_zs(4))),
    MachineInstruction::new("CGIJ", &RIE_C_4, 620, UNI.with(since_zs(4))),
    MachineInstruction::new("CGIT", &RIE_A_3, 633, UNI.with(since_zs(4))),
    MachineInstruction::new("CGR", &RRE_2, 618, UNI.with(since_zs(1))),
    MachineInstruction::new("CGRB", &RRS_4, 619, UNI.with(since_zs(4))),
    MachineInstruction::new("CGRJ", &RIE_B_4, 620, UNI.with(since_zs(4))),
    MachineInstruction::new("CGRL", &RIL_B_2, 619, UNI.with(since_zs(4))),
    MachineInstruction::new("CGRT", &RRF_C_3, 633, UNI.with(since_zs(4))),
    MachineInstruction::new("CGXBR", &RRF_E_3, 1452, UNI.with(since_zs(1))),
    MachineInstruction::new("CGXBRA", &RRF_E_4, 1452, UNI.with(since_zs(5))),
    MachineInstruction::new("CGXR", &RRF_E_3, 1415, UNI.with(since_zs(1))),
    MachineInstruction::new("CGXTR", &RRF_E_3, 1501, UNI.with(since_zs(3))),
    MachineInstruction::new("CGXTRA", &RRF_E_4, 1502, UNI.with(since_zs(5))),
    MachineInstruction::new("CH", &RX_A_2_UX, 634, UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    MachineInstruction::new("CHF", &RXY_A_2, 635, UNI.with(since_zs(5))),
    MachineInstruction::new("CHHR", &RRE_2, 635, UNI.with(since_zs(5))),
    MachineInstruction::new("CHHSI", &SIL_2_S, 634, UNI.with(since_zs(4))),
    MachineInstruction::new("CHI", &RI_A_2_S, 634, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("CHLR", &RRE_2, 635, UNI.with(since_zs(5))),
    MachineInstruction::new("CHRL", &RIL_B_2, 634, UNI.with(since_zs(4))),
    MachineInstruction::new("CHSI", &SIL_2_S, 634, UNI.with(since_zs(4))),
    MachineInstruction::new("CHY", &RXY_A_2, 634, UNI.with(since_zs(2))),
    MachineInstruction::new("CIB", &RIS_4, 620, UNI.with(since_zs(4))),
    MachineInstruction::new("CIH", &RIL_A_2, 635, UNI.with(since_zs(5))),
    MachineInstruction::new("CIJ", &RIE_C_4, 620, UNI.with(since_zs(4))),
    MachineInstruction::new("CIT", &RIE_A_3, 633, UNI.with(since_zs(4))),
    MachineInstruction::new("CKSM", &RRE_2, 533, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("CL", &RX_A_2_UX, 636, UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    MachineInstruction::new("CLC", &SS_A_2_U, 636, UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    MachineInstruction::new("CLCL", &RR_2, 642, UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    MachineInstruction::new("CLCLE", &RS_A_3, 644, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("CLCLU", &RSY_A_3, 647, UNI.with(since_zs(1))),
    MachineInstruction::new("CLFDBR", &RRF_E_4, 1455, UNI.with(since_zs(5))),
    MachineInstruction::new("CLFDTR", &RRF_E_4, 1504, UNI.with(since_zs(5))),
    MachineInstruction::new("CLFEBR", &RRF_E_4, 1455, UNI.with(since_zs(5))),
    MachineInstruction::new("CLFHSI", &SIL_2_U, 636, UNI.with(since_zs(4))),
    MachineInstruction::new("CLFI", &RIL_A_2, 636, UNI.with(since_zs(3))),
    MachineInstruction::new("CLFIT", &RIE_A_3, 640, UNI.with(since_zs(4))),
    MachineInstruction::new("CLFXBR", &RRF_E_4, 1455, UNI.with(since_zs(5))),
    MachineInstruction::new("CLFXTR", &RRF_E_4, 1504, UNI.with(since_zs(5))),
    MachineInstruction::new("CLG", &RXY_A_2, 636, UNI.with(since_zs(1))),
    MachineInstruction::new("CLGDBR", &RRF_E_4, 1455, UNI.with(since_zs(5))),
    MachineInstruction::new("CLGDTR", &RRF_E_4, 1504, UNI.with(since_zs(5))),
    MachineInstruction::new("CLGEBR", &RRF_E_4, 1455, UNI.with(since_zs(5))),
    MachineInstruction::new("CLGF", &RXY_A_2, 636, UNI.with(since_zs(1))),
    MachineInstruction::new("CLGFI", &RIL_A_2, 636, UNI.with(since_zs(3))),
    MachineInstruction::new("CLGFR", &RRE_2, 636, UNI.with(since_zs(1))),
    MachineInstruction::new("CLGFRL", &RIL_B_2, 637, UNI.with(since_zs(4))),
    MachineInstruction::new("CLGHRL", &RIL_B_2, 637, UNI.with(since_zs(4))),
    MachineInstruction::new("CLGHSI", &SIL_2_U, 636, UNI.with(since_zs(4))),
    MachineInstruction::new("CLGIB", &RIS_4, 638, UNI.with(since_zs(4))),
    MachineInstruction::new("CLGIJ", &RIE_C_4, 638, UNI.with(since_zs(4))),
    MachineInstruction::new("CLGIT", &RIE_A_3, 640, UNI.with(since_zs(4))),
    MachineInstruction::new("CLGR", &RRE_2, 636, UNI.with(since_zs(1))),
    MachineInstruction::new("CLGRB", &RRS_4, 638, UNI.with(since_zs(4))),
    MachineInstruction::new("CLGRJ", &RIE_B_4, 638, UNI.with(since_zs(4))),
    MachineInstruction::new("CLGRL", &RIL_B_2, 637, UNI.with(since_zs(4))),
    MachineInstruction::new("CLGRT", &RRF_C_3, 639, UNI.with(since_zs(4))),
    MachineInstruction::new("CLGT", &RSY_B_3_UX, 639, UNI.with(since_zs(6))),
    MachineInstruction::new("CLGXBR", &RRF_E_4, 1455, UNI.with(since_zs(5))),
    MachineInstruction::new("CLGXTR", &RRF_E_4, 1504, UNI.with(since_zs(5))),
    MachineInstruction::new("CLHF", &RXY_A_2, 641, UNI.with(since_zs(5))),
    MachineInstruction::new("CLHHR", &RRE_2, 641, UNI.with(since_zs(5))),
    MachineInstruction::new("CLHHSI", &SIL_2_U, 636, UNI.with(since_zs(4))),
    MachineInstruction::new("CLHLR", &RRE_2, 641, UNI.with(since_zs(5))),
    MachineInstruction::new("CLHRL", &RIL_B_2, 637, UNI.with(since_zs(4))),
    MachineInstruction::new("CLI", &SI_2_U, 636, UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    MachineInstruction::new("CLIB", &RIS_4, 638, UNI.with(since_zs(4))),
    MachineInstruction::new("CLIH", &RIL_A_2, 642, UNI.with(since_zs(5))),
    MachineInstruction::new("CLIJ", &RIE_C_4, 638, UNI.with(since_zs(4))),
    MachineInstruction::new("CLIY", &SIY_2_SU, 636, UNI.with(since_zs(2))),
    MachineInstruction::new("CLM", &RS_B_3, 641, UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    MachineInstruction::new("CLMH", &RSY_B_3_US, 641, UNI.with(since_zs(1))),
    MachineInstruction::new("CLMY", &RSY_B_3_US, 641, UNI.with(since_zs(2))),
    MachineInstruction::new("CLR", &RR_2, 636, UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    MachineInstruction::new("CLRB", &RRS_4, 638, UNI.with(since_zs(4))),
    MachineInstruction::new("CLRCH", &S_1_U, 367, UNI.with(_370)),
    MachineInstruction::new("CLRIO", &S_1_U, 368, UNI.with(_370).with(DOS)),
    MachineInstruction::new("CLRJ", &RIE_B_4, 638, UNI.with(since_zs(4))),
    MachineInstruction::new("CLRL", &RIL_B_2, 637, UNI.with(since_zs(4))),
    MachineInstruction::new("CLRT", &RRF_C_3, 639, UNI.with(since_zs(4))),
    MachineInstruction::new("CLST", &RRE_2, 650, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("CLT", &RSY_B_3_UX, 639, UNI.with(since_zs(6))),
    MachineInstruction::new("CLY", &RXY_A_2, 636, UNI.with(since_zs(2))),
    MachineInstruction::new("CMPSC", &RRE_2, 654, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("CONCS", &S_1_U, 263, UNI.with(_370)),
    MachineInstruction::new("CP", &SS_B_2, 921, UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    MachineInstruction::new("CPDT", &RSL_B_3, 1505, UNI.with(since_zs(7))),
    MachineInstruction::new("CPSDR", &RRF_B_3, 958, UNI.with(since_zs(3))),
    MachineInstruction::new("CPXT", &RSL_B_3, 1505, UNI.with(since_zs(7))),
    MachineInstruction::new("CPYA", &RRE_2, 736, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("CR", &RR_2, 618, UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    MachineInstruction::new("CRB", &RRS_4, 619, UNI.with(since_zs(4))),
    MachineInstruction::new("CRDTE", &RRF_B_4_OPT, 999, UNI.with(since_zs(6))),
    MachineInstruction::new("CRJ", &RIE_B_4, 619, UNI.with(since_zs(4))),
    MachineInstruction::new("CRL", &RIL_B_2, 619, UNI.with(since_zs(4))),
    MachineInstruction::new("CRT", &RRF_C_3, 633, UNI.with(since_zs(4))),
    MachineInstruction::new("CS", &RS_A_3, 628, UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    MachineInstruction::new("CSCH", &S_0, 1217, UNI.with(ESA).with(XA).with(since_zs(1))),
    MachineInstruction::new("CSDTR", &RRF_D_3, 1507, UNI.with(since_zs(3))),
    MachineInstruction::new("CSG", &RSY_A_3, 628, UNI.with(since_zs(1))),
    MachineInstruction::new("CSP", &RRE_2, 1003, UNI.with(since_zs(1))),
    MachineInstruction::new("CSPG", &RRE_2, 1003, UNI.with(since_zs(2))),
    MachineInstruction::new("CSST", &SSF_3_DR, 630, UNI.with(since_zs(3))),
    MachineInstruction::new("CSXTR", &RRF_D_3, 1507, UNI.with(since_zs(3))),
    MachineInstruction::new("CSY", &RSY_A_3, 628, UNI.with(since_zs(2))),
    MachineInstruction::new("CU12", &RRF_C_3_OPT, 728, UNI.with(since_zs(2))),
    MachineInstruction::new("CU14", &RRF_C_3_OPT, 732, UNI.with(since_zs(2))),
    MachineInstruction::new("CU21", &RRF_C_3_OPT, 718, UNI.with(since_zs(2))),
    MachineInstruction::new("CU24", &RRF_C_3_OPT, 715, UNI.with(since_zs(2))),
    MachineInstruction::new("CU41", &RRE_2, 725, UNI.with(since_zs(2))),
    MachineInstruction::new("CU42", &RRE_2, 722, UNI.with(since_zs(2))),
    MachineInstruction::new("CUDTR", &RRE_2, 1507, UNI.with(since_zs(3))),
    MachineInstruction::new("CUSE", &RRE_2, 651, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("CUTFU", &RRF_C_3_OPT, 728, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("CUUTF", &RRF_C_3_OPT, 718, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("CUXTR", &RRE_2, 1507, UNI.with(since_zs(3))),
    MachineInstruction::new("CVB", &RX_A_2_UX, 714, UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    MachineInstruction::new("CVBG", &RXY_A_2, 714, UNI.with(since_zs(1))),
    MachineInstruction::new("CVBY", &RXY_A_2, 714, UNI.with(since_zs(2))),
    MachineInstruction::new("CVD", &RX_A_2_UX, 715, UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    MachineInstruction::new("CVDG", &RXY_A_2, 715, UNI.with(since_zs(1))),
    MachineInstruction::new("CVDY", &RXY_A_2, 715, UNI.with(since_zs(2))),
    MachineInstruction::new("CXBR", &RRE_2, 1447, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("CXFBR", &RRE_2, 1449, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("CXFBRA", &RRF_E_4, 1449, UNI.with(since_zs(5))),
    MachineInstruction::new("CXFR", &RRE_2, 1415, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("CXFTR", &RRF_E_4, 1496, UNI.with(since_zs(5))),
    MachineInstruction::new("CXGBR", &RRE_2, 1449, UNI.with(since_zs(1))),
    MachineInstruction::new("CXGBRA", &RRF_E_4, 1449, UNI.with(since_zs(5))),
    MachineInstruction::new("CXGR", &RRE_2, 1415, UNI.with(since_zs(1))),
    MachineInstruction::new("CXGTR", &RRE_2, 1496, UNI.with(since_zs(3))),
    MachineInstruction::new("CXGTRA", &RRF_E_4, 1496, UNI.with(since_zs(5))),
    MachineInstruction::new("CXLFBR", &RRF_E_4, 1451, UNI.with(since_zs(5))),
    MachineInstruction::new("CXLFTR", &RRF_E_4, 1497, UNI.with(since_zs(5))),
    MachineInstruction::new("CXLGBR", &RRF_E_4, 1451, UNI.with(since_zs(5))),
    MachineInstruction::new("CXLGTR", &RRF_E_4, 1497, UNI.with(since_zs(5))),
    MachineInstruction::new("CXPT", &RSL_B_3, 1498, UNI.with(since_zs(7))),
    MachineInstruction::new("CXR", &RRE_2, 1414, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("CXSTR", &RRE_2, 1500, UNI.with(since_zs(3))),
    MachineInstruction::new("CXTR", &RRE_2, 1494, UNI.with(since_zs(3))),
    MachineInstruction::new("CXUTR", &RRE_2, 1500, UNI.with(since_zs(3))),
    MachineInstruction::new("CXZT", &RSL_B_3, 1501, UNI.with(since_zs(6))),
    MachineInstruction::new("CY", &RXY_A_2, 618, UNI.with(since_zs(2))),
    MachineInstruction::new("CZDT", &RSL_B_3, 1508, UNI.with(since_zs(6))),
    MachineInstruction::new("CZXT", &RSL_B_3, 1508, UNI.with(since_zs(6))),
    MachineInstruction::new("D", &RX_A_2_UX, 736, UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    MachineInstruction::new("DD", &RX_A_2_UX, 1416, UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    MachineInstruction::new("DDB", &RXE_2, 1457, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("DDBR", &RRE_2, 1457, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("DDR", &RR_2, 1416, UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    MachineInstruction::new("DDTR", &RRF_A_3, 1509, UNI.with(since_zs(3))),
    MachineInstruction::new("DDTRA", &RRF_A_4, 1509, UNI.with(since_zs(5))),
    MachineInstruction::new("DE", &RX_A_2_UX, 1416, UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    MachineInstruction::new("DEB", &RXE_2, 1457, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("DEBR", &RRE_2, 1457, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("DER", &RR_2, 1416, UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    MachineInstruction::new("DFLTCC", &RRF_A_3, 1714, UNI.with(since_zs(9))),
    MachineInstruction::new("DIDBR", &RRF_B_4, 1458, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("DIEBR", &RRF_B_4, 1458, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("DISCS", &S_1_U, 265, UNI.with(_370)),
    MachineInstruction::new("DL", &RXY_A_2, 737, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("DLG", &RXY_A_2, 737, UNI.with(since_zs(1))),
    MachineInstruction::new("DLGR", &RRE_2, 737, UNI.with(since_zs(1))),
    MachineInstruction::new("DLR", &RRE_2, 737, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("DP", &SS_B_2, 921, UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    MachineInstruction::new("DR", &RR_2, 736, UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    MachineInstruction::new("DSG", &RXY_A_2, 738, UNI.with(since_zs(1))),
    MachineInstruction::new("DSGF", &RXY_A_2, 738, UNI.with(since_zs(1))),
    MachineInstruction::new("DSGFR", &RRE_2, 738, UNI.with(since_zs(1))),
    MachineInstruction::new("DSGR", &RRE_2, 738, UNI.with(since_zs(1))),
    MachineInstruction::new("DXBR", &RRE_2, 1457, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("DXR", &RRE_2, 1416, UNI.with(ESA).with(XA).with(since_zs(1))),
    MachineInstruction::new("DXTR", &RRF_A_3, 1509, UNI.with(since_zs(3))),
    MachineInstruction::new("DXTRA", &RRF_A_4, 1509, UNI.with(since_zs(5))),
    MachineInstruction::new("EAR", &RRE_2, 741, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("ECAG", &RSY_A_3, 741, UNI.with(since_zs(4))),
    MachineInstruction::new("ECCTR", &RRE_2, 39, UNI.with(since_zs(4))),
    MachineInstruction::new("ECPGA", &RRE_2, 39, UNI.with(since_zs(4))),
    MachineInstruction::new("ECTG", &SSF_3_DR, 744, UNI.with(since_zs(3))),
    MachineInstruction::new("ED", &SS_A_2_U, 922, UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    MachineInstruction::new("EDMK", &SS_A_2_U, 925, UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    MachineInstruction::new("EEDTR", &RRE_2, 1511, UNI.with(since_zs(3))),
    MachineInstruction::new("EEXTR", &RRE_2, 1511, UNI.with(since_zs(3))),
    MachineInstruction::new("EFPC", &RRE_1, 958, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("EPAIR", &RRE_1, 1006, UNI.with(since_zs(2))),
    MachineInstruction::new("EPAR", &RRE_1, 1006, UNI.with(ESA).with(XA).with(_370).with(since_zs(1))),
    MachineInstruction::new("EPCTR", &RRE_2, 39, UNI.with(since_zs(4))),
    MachineInstruction::new("EPSW", &RRE_2, 745, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("EREG", &RRE_2, 1007, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("EREGG", &RRE_2, 1007, UNI.with(since_zs(1))),
    MachineInstruction::new("ESAIR", &RRE_1, 1007, UNI.with(since_zs(2))),
    MachineInstruction::new("ESAR", &RRE_1, 1006, UNI.with(ESA).with(XA).with(_370).with(since_zs(1))),
    MachineInstruction::new("ESDTR", &RRE_2, 1511, UNI.with(since_zs(3))),
    MachineInstruction::new("ESEA", &RRE_1, 1006, UNI.with(since_zs(1))),
    MachineInstruction::new("ESTA", &RRE_2, 1008, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("ESXTR", &RRE_2, 1511, UNI.with(since_zs(3))),
    MachineInstruction::new("ETND", &RRE_1, 745, UNI.with(since_zs(6))),
    MachineInstruction::new("EX", &RX_A_2_UX, 740, UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    MachineInstruction::new("EXRL", &RIL_B_2, 740, UNI.with(since_zs(4))),
    MachineInstruction::new("FIDBR", &RRF_E_3, 1462, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("FIDBRA", &RRF_E_4, 1462, UNI.with(since_zs(5))),
    MachineInstruction::new("FIDR", &RRE_2, 1419, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("FIDTR", &RRF_E_4, 1514, UNI.with(since_zs(3))),
    MachineInstruction::new("FIEBR", &RRF_E_3, 1462, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("FIEBRA", &RRF_E_4, 1462, UNI.with(since_zs(5))),
    MachineInstruction::new("FIER", &RRE_2, 1419, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("FIXBR", &RRF_E_3, 1462, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("FIXBRA", &RRF_E_4, 1462, UNI.with(since_zs(5))),
    MachineInstruction::new("FIXR", &RRE_2, 1419, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("FIXTR", &RRF_E_4, 1514, UNI.with(since_zs(3))),
    MachineInstruction::new("FLOGR", &RRE_2, 746, UNI.with(since_zs(3))),
    MachineInstruction::new("HDR", &RR_2, 1417, UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    MachineInstruction::new("HDV", &S_1_U, 129, UNI.with(_370).with(DOS)),
    MachineInstruction::new("HER", &RR_2, 1417, UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    MachineInstruction::new("HIO", &S_1_U, 129, UNI.with(_370).with(DOS)),
    MachineInstruction::new("HSCH", &S_0, 1218, UNI.with(ESA).with(XA).with(since_zs(1))),
    MachineInstruction::new("IAC", &RRE_1, 1011, UNI.with(ESA).with(XA).with(_370).with(since_zs(1))),
    MachineInstruction::new("IC", &RX_A_2_UX, 746, UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    MachineInstruction::new("ICM", &RS_B_3, 746, UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    MachineInstruction::new("ICMH", &RSY_B_3_US, 746, UNI.with(since_zs(1))),
    MachineInstruction::new("ICMY", &RSY_B_3_US, 746, UNI.with(since_zs(2))),
    MachineInstruction::new("ICY", &RXY_A_2, 746, UNI.with(since_zs(2))),
    MachineInstruction::new("IDTE", &RRF_B_4_OPT, 1014, UNI.with(since_zs(2))),
    MachineInstruction::new("IEDTR", &RRF_B_3, 1512, UNI.with(since_zs(3))),
    MachineInstruction::new("IEXTR", &RRF_B_3, 1512, UNI.with(since_zs(3))),
    MachineInstruction::new("IIHF", &RIL_A_2, 747, UNI.with(since_zs(3))),
    MachineInstruction::new("IIHH", &RI_A_2_U, 747, UNI.with(since_zs(1))),
    MachineInstruction::new("IIHL", &RI_A_2_U, 747, UNI.with(since_zs(1))),
    MachineInstruction::new("IILF", &RIL_A_2, 747, UNI.with(since_zs(3))),
    MachineInstruction::new("IILH", &RI_A_2_U, 747, UNI.with(since_zs(1))),
    MachineInstruction::new("IILL", &RI_A_2_U, 747, UNI.with(since_zs(1))),
    MachineInstruction::new("IPK", &S_0, 1012, UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    MachineInstruction::new("IPM", &RRE_1, 748, UNI.with(ESA).with(XA).with(since_zs(1))),
    MachineInstruction::new("IPTE", &RRF_A_4_OPT, 1019, UNI.with(ESA).with(XA).with(_370).with(since_zs(1))),
    MachineInstruction::new("IRBM", &RRE_2, 1012, UNI.with(since_zs(8))),
    MachineInstruction::new("ISK", &RR_2, 268, UNI.with(_370).with(DOS)),
    MachineInstruction::new("ISKE", &RRE_2, 1012, UNI.with(ESA).with(XA).with(_370).with(since_zs(1))),
    MachineInstruction::new("IVSK", &RRE_2, 1013, UNI.with(ESA).with(XA).with(_370).with(since_zs(1))),
    MachineInstruction::new("KDB", &RXE_2, 1448, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("KDBR", &RRE_2, 1448, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("KDSA", &RRE_2, 1700, UNI.with(since_zs(9))),
    MachineInstruction::new("KDTR", &RRE_2, 1495, UNI.with(since_zs(3))),
    MachineInstruction::new("KEB", &RXE_2, 1448, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("KEBR", &RRE_2, 1448, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("KIMD", &RRE_2, 672, UNI.with(since_zs(2))),
    MachineInstruction::new("KLMD", &RRE_2, 685, UNI.with(since_zs(2))),
    MachineInstruction::new("KM", &RRE_2, 537, UNI.with(since_zs(2))),
    MachineInstruction::new("KMA", &RRF_B_3, 562, UNI.with(since_zs(8))),
    MachineInstruction::new("KMAC", &RRE_2, 703, UNI.with(since_zs(2))),
    MachineInstruction::new("KMC", &RRE_2, 537, UNI.with(since_zs(2))),
    MachineInstruction::new("KMCTR", &RRF_B_3, 591, UNI.with(since_zs(5))),
    MachineInstruction::new("KMF", &RRE_2, 576, UNI.with(since_zs(5))),
    MachineInstruction::new("KMO", &RRE_2, 604, UNI.with(since_zs(5))),
    MachineInstruction::new("KXBR", &RRE_2, 1448, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("KXTR", &RRE_2, 1495, UNI.with(since_zs(3))),
    MachineInstruction::new("L", &RX_A_2_UX, 748, UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    MachineInstruction::new("LA", &RX_A_2_UX, 750, UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    MachineInstruction::new("LAA", &RSY_A_3, 752, UNI.with(since_zs(5))),
    MachineInstruction::new("LAAG", &RSY_A_3, 752, UNI.with(since_zs(5))),
    MachineInstruction::new("LAAL", &RSY_A_3, 752, UNI.with(since_zs(5))),
    MachineInstruction::new("LAALG", &RSY_A_3, 752, UNI.with(since_zs(5))),
    MachineInstruction::new("LAE", &RX_A_2_UX, 750, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("LAEY", &RXY_A_2, 750, UNI.with(since_zs(4))),
    MachineInstruction::new("LAM", &RS_A_3, 749, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("LAMY", &RSY_A_3, 749, UNI.with(since_zs(2))),
    MachineInstruction::new("LAN", &RSY_A_3, 753, UNI.with(since_zs(5))),
    MachineInstruction::new("LANG", &RSY_A_3, 753, UNI.with(since_zs(5))),
    MachineInstruction::new("LAO", &RSY_A_3, 754, UNI.with(since_zs(5))),
    MachineInstruction::new("LAOG", &RSY_A_3, 754, UNI.with(since_zs(5))),
    MachineInstruction::new("LARL", &RIL_B_2, 751, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("LASP", &SSE_2, 1023, UNI.with(ESA).with(XA).with(_370).with(since_zs(1))),
    MachineInstruction::new("LAT", &RXY_A_2, 755, UNI.with(since_zs(6))),
    MachineInstruction::new("LAX", &RSY_A_3, 753, UNI.with(since_zs(5))),
    MachineInstruction::new("LAXG", &RSY_A_3, 753, UNI.with(since_zs(5))),
    MachineInstruction::new("LAY", &RXY_A_2, 750, UNI.with(since_zs(2))),
    MachineInstruction::new("LB", &RXY_A_2, 756, UNI.with(since_zs(2))),
    MachineInstruction::new("LBH", &RXY_A_2, 756, UNI.with(since_zs(5))),
    MachineInstruction::new("LBR", &RRE_2, 756, UNI.with(since_zs(3))),
    MachineInstruction::new("LCBB", &RXE_3_XM, 757, UNI.with(since_zs(7))),
    MachineInstruction::new("LCCTL", &S_1_U, 40, UNI.with(since_zs(4))),
    MachineInstruction::new("LCDBR", &RRE_2, 1461, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("LCDFR", &RRE_2, 959, UNI.with(since_zs(3))),
    MachineInstruction::new("LCDR", &RR_2, 1418, UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    MachineInstruction::new("LCEBR", &RRE_2, 1461, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("LCER", &RR_2, 1418, UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    MachineInstruction::new("LCGFR", &RRE_2, 757, UNI.with(since_zs(1))),
    MachineInstruction::new("LCGR", &RRE_2, 757, UNI.with(since_zs(1))),
    MachineInstruction::new("LCR", &RR_2, 756, UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    MachineInstruction::new("LCTL", &RS_A_3, 1032, UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    MachineInstruction::new("LCTLG", &RSY_A_3, 1032, UNI.with(since_zs(1))),
    MachineInstruction::new("LCXBR", &RRE_2, 1461, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("LCXR", &RRE_2, 1418, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("LD", &RX_A_2_UX, 959, UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    MachineInstruction::new("LDE", &RXE_2, 1419, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("LDEB", &RRE_2, 1464, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("LDEBR", &RRE_2, 1463, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("LDER", &RRE_2, 1419, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("LDETR", &RRF_D_3, 1517, UNI.with(since_zs(3))),
    MachineInstruction::new("LDGR", &RRE_2, 962, UNI.with(since_zs(3))),
    MachineInstruction::new("LDR", &RR_2, 959, UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    MachineInstruction::new("LDXBR", &RRE_2, 1465, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("LDXBRA", &RRF_E_4, 1465, UNI.with(since_zs(5))),
    MachineInstruction::new("LDXR", &RR_2, 1421, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("LDXTR", &RRF_E_4, 1518, UNI.with(since_zs(3))),
    MachineInstruction::new("LDY", &RXY_A_2, 959, UNI.with(since_zs(2))),
    MachineInstruction::new("LE", &RX_A_2_UX, 959, UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    MachineInstruction::new("LEDBR", &RRE_2, 1465, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("LEDBRA", &RRF_E_4, 1465, UNI.with(since_zs(5))),
    MachineInstruction::new("LEDR", &RR_2, 1421, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("LEDTR", &RRF_E_4, 1518, UNI.with(since_zs(3))),
    MachineInstruction::new("LER", &RR_2, 959, UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    MachineInstruction::new("LEXBR", &RRE_2, 1465, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("LEXBRA", &RRF_E_4, 1465, UNI.with(since_zs(5))),
    MachineInstruction::new("LEXR", &RRE_2, 1421, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("LEY", &RXY_A_2, 959, UNI.with(since_zs(2))),
    MachineInstruction::new("LFAS", &S_1_U, 960, UNI.with(since_zs(3))),
    MachineInstruction::new("LFH", &RXY_A_2, 762, UNI.with(since_zs(5))),
    MachineInstruction::new("LFHAT", &RXY_A_2, 762, UNI.with(since_zs(6))),
    MachineInstruction::new("LFPC", &S_1_U, 959, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("LG", &RXY_A_2, 748, UNI.with(since_zs(1))),
    MachineInstruction::new("LGAT", &RXY_A_2, 755, UNI.with(since_zs(6))),
    MachineInstruction::new("LGB", &RXY_A_2, 756, UNI.with(since_zs(2))),
    MachineInstruction::new("LGBR", &RRE_2, 756, UNI.with(since_zs(3))),
    MachineInstruction::new("LGDR", &RRE_2, 962, UNI.with(since_zs(3))),
    MachineInstruction::new("LGF", &RXY_A_2, 748, UNI.with(since_zs(1))),
    MachineInstruction::new("LGFI", &RIL_A_2, 748, UNI.with(since_zs(3))),
    MachineInstruction::new("LGFR", &RRE_2, 748, UNI.with(since_zs(1))),
    MachineInstruction::new("LGFRL", &RIL_B_2, 748, UNI.with(since_zs(4))),
    MachineInstruction::new("LGG", &RXY_A_2, 758, UNI.with(since_zs(8))),
    MachineInstruction::new("LGH", &RXY_A_2, 760, UNI.with(since_zs(1))),
    MachineInstruction::new("LGHI", &RI_A_2_S, 760, UNI.with(since_zs(1))),
    MachineInstruction::new("LGHR", &RRE_2, 760, UNI.with(since_zs(3))),
    MachineInstruction::new("LGHRL", &RIL_B_2, 760, UNI.with(since_zs(4))),
    MachineInstruction::new("LGR", &RRE_2, 748, UNI.with(since_zs(1))),
    MachineInstruction::new("LGRL", &RIL_B_2, 748, UNI.with(since_zs(4))),
    MachineInstruction::new("LGSC", &RXY_A_2, 759, UNI.with(since_zs(8))),
    MachineInstruction::new("LH", &RX_A_2_UX, 760, UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    MachineInstruction::new("LHH", &RXY_A_2, 761, UNI.with(since_zs(5))),
    MachineInstruction::new("LHI", &RI_A_2_S, 760, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("LHR", &RRE_2, 760, UNI.with(since_zs(3))),
    MachineInstruction::new("LHRL", &RIL_B_2, 760, UNI.with(since_zs(4))),
    MachineInstruction::new("LHY", &RXY_A_2, 760, UNI.with(since_zs(2))),
    MachineInstruction::new("LLC", &RXY_A_2, 763, UNI.with(since_zs(3))),
    MachineInstruction::new("LLCH", &RXY_A_2, 764, UNI.with(since_zs(5))),
    MachineInstruction::new("LLCR", &RRE_2, 763, UNI.with(since_zs(3))),
    MachineInstruction::new("LLGC", &RXY_A_2, 763, UNI.with(since_zs(1))),
    MachineInstruction::new("LLGCR", &RRE_2, 763, UNI.with(since_zs(3))),
    MachineInstruction::new("LLGF", &RXY_A_2, 762, UNI.with(since_zs(1))),
    MachineInstruction::new("LLGFAT", &RXY_A_2, 763, UNI.with(since_zs(6))),
    MachineInstruction::new("LLGFR", &RRE_2, 762, UNI.with(since_zs(1))),
    MachineInstruction::new("LLGFRL", &RIL_B_2, 762, UNI.with(since_zs(4))),
    MachineInstruction::new("LLGFSG", &RXY_A_2, 758, UNI.with(since_zs(8))),
    MachineInstruction::new("LLGH", &RXY_A_2, 764, UNI.with(since_zs(1))),
    MachineInstruction::new("LLGHR", &RRE_2, 764, UNI.with(since_zs(3))),
    MachineInstruction::new("LLGHRL", &RIL_B_2, 764, UNI.with(since_zs(4))),
    MachineInstruction::new("LLGT", &RXY_A_2, 766, UNI.with(since_zs(1))),
    MachineInstruction::new("LLGTAT", &RXY_A_2, 766, UNI.with(since_zs(6))),
    MachineInstruction::new("LLGTR", &RRE_2, 765, UNI.with(since_zs(1))),
    MachineInstruction::new("LLH", &RXY_A_2, 764, UNI.with(since_zs(3))),
    MachineInstruction::new("LLHH", &RXY_A_2, 765, UNI.with(since_zs(5))),
    MachineInstruction::new("LLHR", &RRE_2, 764, UNI.with(since_zs(3))),
    MachineInstruction::new("LLHRL", &RIL_B_2, 764, UNI.with(since_zs(4))),
    MachineInstruction::new("LLIHF", &RIL_A_2, 765, UNI.with(since_zs(3))),
    MachineInstruction::new("LLIHH", &RI_A_2_U, 765, UNI.with(since_zs(1))),
    MachineInstruction::new("LLIHL", &RI_A_2_U, 765, UNI.with(since_zs(1))),
    MachineInstruction::new("LLILF", &RIL_A_2, 765, UNI.with(since_zs(3))),
    MachineInstruction::new("LLILH", &RI_A_2_U, 765, UNI.with(since_zs(1))),
    MachineInstruction::new("LLILL", &RI_A_2_U, 765, UNI.with(since_zs(1))),
    MachineInstruction::new("LLZRGF", &RXY_A_2, 763, UNI.with(since_zs(7))),
    MachineInstruction::new("LM", &RS_A_3, 766, UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    MachineInstruction::new("LMD", &SS_E_4_RB, 767, UNI.with(since_zs(1))),
    MachineInstruction::new("LMG", &RSY_A_3, 766, UNI.with(since_zs(1))),
    MachineInstruction::new("LMH", &RSY_A_3, 767, UNI.with(since_zs(1))),
    MachineInstruction::new("LMY", &RSY_A_3, 766, UNI.with(since_zs(2))),
    MachineInstruction::new("LNDBR", &RRE_2, 1464, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("LNDFR", &RRE_2, 962, UNI.with(since_zs(3))),
    MachineInstruction::new("LNDR", &RR_2, 1420, UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    MachineInstruction::new("LNEBR", &RRE_2, 1464, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("LNER", &RR_2, 1420, UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    MachineInstruction::new("LNGFR", &RRE_2, 768, UNI.with(since_zs(1))),
    MachineInstruction::new("LNGR", &RRE_2, 767, UNI.with(since_zs(1))),
    MachineInstruction::new("LNR", &RR_2, 767, UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    MachineInstruction::new("LNXBR", &RRE_2, 1464, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("LNXR", &RRE_2, 1420, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("LOC", &RSY_B_3_SU, 768, UNI.with(since_zs(5))),
    MachineInstruction::new("LOCFH", &RSY_B_3_SU, 768, UNI.with(since_zs(7))),
    MachineInstruction::new("LOCFHR", &RRF_C_3, 768, UNI.with(since_zs(7))),
    MachineInstruction::new("LOCG", &RSY_B_3_SU, 768, UNI.with(since_zs(5))),
    MachineInstruction::new("LOCGHI", &RIE_G_3, 761, UNI.with(since_zs(7))),
    MachineInstruction::new("LOCGR", &RRF_C_3, 768, UNI.with(since_zs(5))),
    MachineInstruction::new("LOCHHI", &RIE_G_3, 761, UNI.with(since_zs(7))),
    MachineInstruction::new("LOCHI", &RIE_G_3, 761, UNI.with(since_zs(7))),
    MachineInstruction::new("LOCR", &RRF_C_3, 768, UNI.with(since_zs(5))),
    MachineInstruction::new("LPCTL", &S_1_U, 41, UNI.with(since_zs(4))),
    MachineInstruction::new("LPD", &SSF_3_RD, 769, UNI.with(since_zs(5))),
    MachineInstruction::new("LPDBR", &RRE_2, 1465, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("LPDFR", &RRE_2, 962, UNI.with(since_zs(3))),
    MachineInstruction::new("LPDG", &SSF_3_RD, 769, UNI.with(since_zs(5))),
    MachineInstruction::new("LPDR", &RR_2, 1420, UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    MachineInstruction::new("LPEBR", &RRE_2, 1465, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("LPER", &RR_2, 1420, UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    MachineInstruction::new("LPGFR", &RRE_2, 771, UNI.with(since_zs(1))),
    MachineInstruction::new("LPGR", &RRE_2, 771, UNI.with(since_zs(1))),
    MachineInstruction::new("LPP", &S_1_U, 11, UNI.with(since_zs(4))),
    MachineInstruction::new("LPQ", &RXY_A_2, 770, UNI.with(since_zs(1))),
    MachineInstruction::new("LPR", &RR_2, 771, UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    MachineInstruction::new("LPSW", &SI_1, 1036, UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    MachineInstruction::new("LPSWE", &S_1_U, 1037, UNI.with(since_zs(1))),
    MachineInstruction::new("LPTEA", &RRF_B_4, 1032, UNI.with(since_zs(3))),
    MachineInstruction::new("LPXBR", &RRE_2, 1465, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("LPXR", &RRE_2, 1420, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("LR", &RR_2, 748, UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    MachineInstruction::new("LRA", &RX_A_2_UX, 1038, UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    MachineInstruction::new("LRAG", &RXY_A_2, 1038, UNI.with(since_zs(1))),
    MachineInstruction::new("LRAY", &RXY_A_2, 1038, UNI.with(since_zs(2))),
    MachineInstruction::new("LRDR", &RR_2, 1421, UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    MachineInstruction::new("LRER", &RR_2, 1421, UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    MachineInstruction::new("LRL", &RIL_B_2, 748, UNI.with(since_zs(4))),
    MachineInstruction::new("LRV", &RXY_A_2, 771, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("LRVG", &RXY_A_2, 771, UNI.with(since_zs(1))),
    MachineInstruction::new("LRVGR", &RRE_2, 771, UNI.with(since_zs(1))),
    MachineInstruction::new("LRVH", &RXY_A_2, 771, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("LRVR", &RRE_2, 771, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("LSCTL", &S_1_U, 42, UNI.with(since_zs(4))),
    MachineInstruction::new("LT", &RXY_A_2, 755, UNI.with(since_zs(3))),
    MachineInstruction::new("LTDBR", &RRE_2, 1461, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("LTDR", &RR_2, 1417, UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    MachineInstruction::new("LTDTR", &RRE_2, 1513, UNI.with(since_zs(3))),
    MachineInstruction::new("LTEBR", &RRE_2, 1461, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("LTER", &RR_2, 1417, UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    MachineInstruction::new("LTG", &RXY_A_2, 755, UNI.with(since_zs(3))),
    MachineInstruction::new("LTGF", &RXY_A_2, 755, UNI.with(since_zs(4))),
    MachineInstruction::new("LTGFR", &RRE_2, 754, UNI.with(since_zs(1))),
    MachineInstruction::new("LTGR", &RRE_2, 754, UNI.with(since_zs(1))),
    MachineInstruction::new("LTR", &RR_2, 754, UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    MachineInstruction::new("LTXBR", &RRE_2, 1461, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("LTXR", &RRE_2, 1418, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("LTXTR", &RRE_2, 1513, UNI.with(since_zs(3))),
    MachineInstruction::new("LURA", &RRE_2, 1042, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("LURAG", &RRE_2, 1042, UNI.with(since_zs(1))),
    MachineInstruction::new("LXD", &RXE_2, 1419, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("LXDB", &RRE_2, 1464, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("LXDBR", &RRE_2, 1463, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("LXDR", &RRE_2, 1419, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("LXDTR", &RRF_D_3, 1517, UNI.with(since_zs(3))),
    MachineInstruction::new("LXE", &RXE_2, 1419, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("LXEB", &RRE_2, 1464, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("LXEBR", &RRE_2, 1463, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("LXER", &RRE_2, 1419, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("LXR", &RRE_2, 959, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("LY", &RXY_A_2, 748, UNI.with(since_zs(2))),
    MachineInstruction::new("LZDR", &RRE_1, 963, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("LZER", &RRE_1, 963, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("LZRF", &RXY_A_2, 755, UNI.with(since_zs(7))),
    MachineInstruction::new("LZRG", &RXY_A_2, 755, UNI.with(since_zs(7))),
    MachineInstruction::new("LZXR", &RRE_1, 963, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("M", &RX_A_2_UX, 788, UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    MachineInstruction::new("MAD", &RXF_3_X, 1423, UNI.with(since_zs(2))),
    MachineInstruction::new("MADB", &RXF_3_X, 1468, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("MADBR", &RRD_3, 1468, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("MADR", &RRD_3, 1423, UNI.with(since_zs(2))),
    MachineInstruction::new("MAE", &RXF_3_X, 1423, UNI.with(since_zs(2))),
    MachineInstruction::new("MAEB", &RXF_3_X, 1468, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("MAEBR", &RRD_3, 1468, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("MAER", &RRD_3, 1423, UNI.with(since_zs(2))),
    MachineInstruction::new("MAY", &RXF_3_X, 1424, UNI.with(since_zs(3))),
    MachineInstruction::new("MAYH", &RXF_3_X, 1424, UNI.with(since_zs(3))),
    MachineInstruction::new("MAYHR", &RRD_3, 1424, UNI.with(since_zs(3))),
    MachineInstruction::new("MAYL", &RXF_3_X, 1424, UNI.with(since_zs(3))),
    MachineInstruction::new("MAYLR", &RRD_3, 1424, UNI.with(since_zs(3))),
    MachineInstruction::new("MAYR", &RRD_3, 1424, UNI.with(since_zs(3))),
    MachineInstruction::new("MC", &SI_2_S, 772, UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    MachineInstruction::new("MD", &RX_A_2_UX, 1422, UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    MachineInstruction::new("MDB", &RXE_2, 1467, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("MDBR", &RRE_2, 1467, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("MDE", &RX_A_2_UX, 1422, UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    MachineInstruction::new("MDEB", &RXE_2, 1467, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("MDEBR", &RRE_2, 1467, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("MDER", &RR_2, 1421, UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    MachineInstruction::new("MDR", &RR_2, 1421, UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    MachineInstruction::new("MDTR", &RRF_A_3, 1519, UNI.with(since_zs(3))),
    MachineInstruction::new("MDTRA", &RRF_A_4, 1520, UNI.with(since_zs(5))),
    MachineInstruction::new("ME", &RX_A_2_UX, 1422, UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    MachineInstruction::new("MEE", &RXE_2, 1422, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("MEEB", &RXE_2, 1467, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("MEEBR", &RRE_2, 1467, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("MEER", &RRE_2, 1421, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("MER", &RR_2, 1421, UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    MachineInstruction::new("MFY", &RXY_A_2, 788, UNI.with(since_zs(4))),
    MachineInstruction::new("MG", &RXY_A_2, 788, UNI.with(since_zs(8))),
    MachineInstruction::new("MGH", &RXY_A_2, 789, UNI.with(since_zs(8))),
    MachineInstruction::new("MGHI", &RI_A_2_S, 789, UNI.with(since_zs(1))),
    MachineInstruction::new("MGRK", &RRF_A_3, 788, UNI.with(since_zs(8))),
    MachineInstruction::new("MH", &RX_A_2_UX, 789, UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    MachineInstruction::new("MHI", &RI_A_2_S, 789, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("MHY", &RXY_A_2, 789, UNI.with(since_zs(4))),
    MachineInstruction::new("ML", &RXY_A_2, 790, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("MLG", &RXY_A_2, 790, UNI.with(since_zs(1))),
    MachineInstruction::new("MLGR", &RRE_2, 790, UNI.with(since_zs(1))),
    MachineInstruction::new("MLR", &RRE_2, 790, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("MP", &SS_B_2, 926, UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    MachineInstruction::new("MR", &RR_2, 788, UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    MachineInstruction::new("MS", &RX_A_2_UX, 791, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("MSC", &RXY_A_2, 791, UNI.with(since_zs(8))),
    MachineInstruction::new("MSCH", &S_1_U, 1219, UNI.with(ESA).with(XA).with(since_zs(1))),
    MachineInstruction::new("MSD", &RXF_3_X, 1423, UNI.with(since_zs(2))),
    MachineInstruction::new("MSDB", &RXF_3_X, 1468, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("MSDBR", &RRD_3, 1468, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("MSDR", &RRD_3, 1423, UNI.with(since_zs(2))),
    MachineInstruction::new("MSE", &RXF_3_X, 1423, UNI.with(since_zs(2))),
    MachineInstruction::new("MSEB", &RXF_3_X, 1468, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("MSEBR", &RRD_3, 1468, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("MSER", &RRD_3, 1423, UNI.with(since_zs(2))),
    MachineInstruction::new("MSFI", &RIL_A_2, 791, UNI.with(since_zs(4))),
    MachineInstruction::new("MSG", &RXY_A_2, 791, UNI.with(since_zs(1))),
    MachineInstruction::new("MSGC", &RXY_A_2, 791, UNI.with(since_zs(8))),
    MachineInstruction::new("MSGF", &RXY_A_2, 791, UNI.with(since_zs(1))),
    MachineInstruction::new("MSGFI", &RIL_A_2, 791, UNI.with(since_zs(4))),
    MachineInstruction::new("MSGFR", &RRE_2, 791, UNI.with(since_zs(1))),
    MachineInstruction::new("MSGR", &RRE_2, 791, UNI.with(since_zs(1))),
    MachineInstruction::new("MSGRKC", &RRF_A_3, 791, UNI.with(since_zs(8))),
    MachineInstruction::new("MSR", &RRE_2, 791, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("MSRKC", &RRF_A_3, 791, UNI.with(since_zs(8))),
    MachineInstruction::new("MSTA", &RRE_1, 1043, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("MSY", &RXY_A_2, 791, UNI.with(since_zs(2))),
    MachineInstruction::new("MVC", &SS_A_2_U, 773, UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    MachineInstruction::new("MVCDK", &SSE_2, 1048, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("MVCIN", &SS_A_2_U, 774, UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    MachineInstruction::new("MVCK", &SS_D_3, 1049, UNI.with(ESA).with(XA).with(_370).with(since_zs(1))),
    MachineInstruction::new("MVCL", &RR_2, 774, UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    MachineInstruction::new("MVCLE", &RS_A_3, 778, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("MVCLU", &RSY_A_3, 781, UNI.with(since_zs(1))),
    MachineInstruction::new("MVCOS", &SSF_3_DR, 1050, UNI.with(since_zs(3))),
    MachineInstruction::new("MVCP", &SS_D_3, 1046, UNI.with(ESA).with(XA).with(_370).with(since_zs(1))),
    MachineInstruction::new("MVCRL", &SSE_2, 788, UNI.with(since_zs(9))),
    MachineInstruction::new("MVCS", &SS_D_3, 1046, UNI.with(ESA).with(XA).with(_370).with(since_zs(1))),
    MachineInstruction::new("MVCSK", &SSE_2, 1053, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("MVGHI", &SIL_2_S, 773, UNI.with(since_zs(4))),
    MachineInstruction::new("MVHHI", &SIL_2_S, 773, UNI.with(since_zs(4))),
    MachineInstruction::new("MVHI", &SIL_2_S, 773, UNI.with(since_zs(4))),
    MachineInstruction::new("MVI", &SI_2_U, 773, UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    MachineInstruction::new("MVIY", &SIY_2_SU, 773, UNI.with(since_zs(2))),
    MachineInstruction::new("MVN", &SS_A_2_U, 785, UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    MachineInstruction::new("MVO", &SS_B_2, 786, UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    MachineInstruction::new("MVPG", &RRE_2, 1044, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("MVST", &RRE_2, 785, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("MVZ", &SS_A_2_U, 787, UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    MachineInstruction::new("MXBR", &RRE_2, 1467, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("MXD", &RX_A_2_UX, 1422, UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    MachineInstruction::new("MXDB", &RXE_2, 1467, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("MXDBR", &RRE_2, 1467, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("MXDR", &RR_2, 1421, UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    MachineInstruction::new("MXR", &RR_2, 1421, UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    MachineInstruction::new("MXTR", &RRF_A_3, 1519, UNI.with(since_zs(3))),
    MachineInstruction::new("MXTRA", &RRF_A_4, 1520, UNI.with(since_zs(5))),
    MachineInstruction::new("MY", &RXF_3_X, 1426, UNI.with(since_zs(3))),
    MachineInstruction::new("MYH", &RXF_3_X, 1426, UNI.with(since_zs(3))),
    MachineInstruction::new("MYHR", &RRD_3, 1426, UNI.with(since_zs(3))),
    MachineInstruction::new("MYL", &RXF_3_X, 1426, UNI.with(since_zs(3))),
    MachineInstruction::new("MYLR", &RRD_3, 1426, UNI.with(since_zs(3))),
    MachineInstruction::new("MYR", &RRD_3, 1426, UNI.with(since_zs(3))),
    MachineInstruction::new("N", &RX_A_2_UX, 517, UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    MachineInstruction::new("NC", &SS_A_2_U, 518, UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    MachineInstruction::new("NCGRK", &RRF_A_3, 522, UNI.with(since_zs(9))),
    MachineInstruction::new("NCRK", &RRF_A_3, 522, UNI.with(since_zs(9))),
    MachineInstruction::new("NG", &RXY_A_2, 517, UNI.with(since_zs(1))),
    MachineInstruction::new("NGR", &RRE_2, 517, UNI.with(since_zs(1))),
    MachineInstruction::new("NGRK", &RRF_A_3, 517, UNI.with(since_zs(5))),
    MachineInstruction::new("NI", &SI_2_U, 517, UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    MachineInstruction::new("NIAI", &IE_2, 792, UNI.with(since_zs(6))),
    MachineInstruction::new("NIHF", &RIL_A_2, 518, UNI.with(since_zs(3))),
    MachineInstruction::new("NIHH", &RI_A_2_U, 518, UNI.with(since_zs(1))),
    MachineInstruction::new("NIHL", &RI_A_2_U, 518, UNI.with(since_zs(1))),
    MachineInstruction::new("NILF", &RIL_A_2, 519, UNI.with(since_zs(3))),
    MachineInstruction::new("NILH", &RI_A_2_U, 519, UNI.with(since_zs(1))),
    MachineInstruction::new("NILL", &RI_A_2_U, 519, UNI.with(since_zs(1))),
    MachineInstruction::new("NIY", &SIY_2_SU, 518, UNI.with(since_zs(2))),
    MachineInstruction::new("NNGRK", &RRF_A_3, 796, UNI.with(since_zs(9))),
    MachineInstruction::new("NNRK", &RRF_A_3, 796, UNI.with(since_zs(9))),
    MachineInstruction::new("NOGRK", &RRF_A_3, 799, UNI.with(since_zs(9))),
    MachineInstruction::new("NORK", &RRF_A_3, 799, UNI.with(since_zs(9))),
    MachineInstruction::new("NR", &RR_2, 517, UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    MachineInstruction::new("NRK", &RRF_A_3, 517, UNI.with(since_zs(5))),
    MachineInstruction::new("NTSTG", &RXY_A_2, 794, UNI.with(since_zs(6))),
    MachineInstruction::new("NXGRK", &RRF_A_3, 799, UNI.with(since_zs(9))),
    MachineInstruction::new("NXRK", &RRF_A_3, 799, UNI.with(since_zs(9))),
    MachineInstruction::new("NY", &RXY_A_2, 517, UNI.with(since_zs(2))),
    MachineInstruction::new("O", &RX_A_2_UX, 794, UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    MachineInstruction::new("OC", &SS_A_2_U, 795, UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    MachineInstruction::new("OCGRK", &RRF_A_3, 802, UNI.with(since_zs(9))),
    MachineInstruction::new("OCRK", &RRF_A_3, 802, UNI.with(since_zs(9))),
    MachineInstruction::new("OG", &RXY_A_2, 795, UNI.with(since_zs(1))),
    MachineInstruction::new("OGR", &RRE_2, 794, UNI.with(since_zs(1))),
    MachineInstruction::new("OGRK", &RRF_A_3, 794, UNI.with(since_zs(5))),
    MachineInstruction::new("OI", &SI_2_U, 795, UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    MachineInstruction::new("OIHF", &RIL_A_2, 796, UNI.with(since_zs(3))),
    MachineInstruction::new("OIHH", &RI_A_2_U, 796, UNI.with(since_zs(1))),
    MachineInstruction::new("OIHL", &RI_A_2_U, 796, UNI.with(since_zs(1))),
    MachineInstruction::new("OILF", &RIL_A_2, 796, UNI.with(since_zs(3))),
    MachineInstruction::new("OILH", &RI_A_2_U, 796, UNI.with(since_zs(1))),
    MachineInstruction::new("OILL", &RI_A_2_U, 796, UNI.with(since_zs(1))),
    MachineInstruction::new("OIY", &SIY_2_SU, 795, UNI.with(since_zs(2))),
    MachineInstruction::new("OR", &RR_2, 794, UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    MachineInstruction::new("ORK", &RRF_A_3, 794, UNI.with(since_zs(5))),
    MachineInstruction::new("OY", &RXY_A_2, 794, UNI.with(since_zs(2))),
    MachineInstruction::new("PACK", &SS_B_2, 796, UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    MachineInstruction::new("PALB", &RRE_0, 1098, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("PC", &S_1_U, 1072, UNI.with(ESA).with(XA).with(_370).with(since_zs(1))),
    MachineInstruction::new("PCC", &RRE_0, 799, UNI.with(since_zs(5))),
    MachineInstruction::new("PCKMO", &RRE_0, 1056, UNI.with(since_zs(4))),
    MachineInstruction::new("PFD", &RXY_B_2, 843, UNI.with(since_zs(4))),
    MachineInstruction::new("PFDRL", &RIL_C_2, 843, UNI.with(since_zs(4))),
    MachineInstruction::new("PFMF", &RRE_2, 1059, UNI.with(since_zs(4))),
    MachineInstruction::new("PFPO", &E_0, 963, UNI.with(since_zs(3))),
    MachineInstruction::new("PGIN", &RRE_2, 1054, UNKNOWN),
    MachineInstruction::new("PGOUT", &RRE_2, 1055, UNKNOWN),
    MachineInstruction::new("PKA", &SS_F_2, 797, UNI.with(since_zs(1))),
    MachineInstruction::new("PKU", &SS_F_2, 798, UNI.with(since_zs(1))),
    MachineInstruction::new("PLO", &SS_E_4_BR, 815, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("POPCNT", &RRF_C_3_OPT, 853, UNI.with(since_zs(5))),
    MachineInstruction::new("PPA", &RRF_C_3, 829, UNI.with(since_zs(6))),
    MachineInstruction::new("PPNO", &RRE_2, 830, UNI.with(since_zs(6))),
    MachineInstruction::new("PR", &E_0, 1085, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("PRNO", &RRE_2, 830, UNI.with(since_zs(8))),
    MachineInstruction::new("PT", &RRE_2, 1089, UNI.with(ESA).with(XA).with(_370).with(since_zs(1))),
    MachineInstruction::new("PTF", &RRE_1, 1071, UNI.with(since_zs(4))),
    MachineInstruction::new("PTFF", &E_0, 1063, UNI.with(since_zs(3))),
    MachineInstruction::new("PTI", &RRE_2, 1089, UNI.with(since_zs(2))),
    MachineInstruction::new("PTLB", &S_0, 1098, UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    MachineInstruction::new("QADTR", &RRF_B_4, 1521, UNI.with(since_zs(3))),
    MachineInstruction::new("QAXTR", &RRF_B_4, 1521, UNI.with(since_zs(3))),
    MachineInstruction::new("QCTRI", &S_1_U, 43, UNI.with(since_zs(4))),
    MachineInstruction::new("QSI", &S_1_U, 45, UNI.with(since_zs(4))),
    MachineInstruction::new("RCHP", &S_0, 1221, UNI.with(ESA).with(XA).with(since_zs(1))),
    MachineInstruction::new("RISBG", &RIE_F_5, 847, UNI.with(since_zs(4))),
    MachineInstruction::new("RISBGN", &RIE_F_5, 847, UNI.with(since_zs(6))),
    MachineInstruction::new("RISBGNZ", &RIE_F_5, 860, UNI.with(since_zs(6))),
    MachineInstruction::new("RISBGZ", &RIE_F_5, 858, UNI.with(since_zs(4))),
    MachineInstruction::new("RISBHG", &RIE_F_5, 848, UNI.with(since_zs(5))),
    MachineInstruction::new("RISBHGZ", &RIE_F_5, 860, UNI.with(since_zs(5))),
    MachineInstruction::new("RISBLG", &RIE_F_5, 849, UNI.with(since_zs(5))),
    MachineInstruction::new("RISBLGZ", &RIE_F_5, 860, UNI.with(since_zs(5))),
    MachineInstruction::new("RLL", &RSY_A_3, 845, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("RLLG", &RSY_A_3, 845, UNI.with(since_zs(1))),
    MachineInstruction::new("RNSBG", &RIE_F_5, 845, UNI.with(since_zs(4))),
    MachineInstruction::new("RNSBGT", &RIE_F_5, 845, UNI.with(since_zs(4))),
    MachineInstruction::new("ROSBG", &RIE_F_5, 846, UNI.with(since_zs(4))),
    MachineInstruction::new("ROSBGT", &RIE_F_5, 858, UNI.with(since_zs(4))),
    MachineInstruction::new("RP", &S_1_U, 1099, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("RRB", &S_1_U, 295, UNI.with(_370).with(DOS)),
    MachineInstruction::new("RRBE", &RRE_2, 1098, UNI.with(ESA).with(XA).with(_370).with(since_zs(1))),
    MachineInstruction::new("RRBM", &RRE_2, 1099, UNI.with(since_zs(5))),
    MachineInstruction::new("RRDTR", &RRF_B_4, 1524, UNI.with(since_zs(3))),
    MachineInstruction::new("RRXTR", &RRF_B_4, 1524, UNI.with(since_zs(3))),
    MachineInstruction::new("RSCH", &S_0, 1222, UNI.with(ESA).with(XA).with(since_zs(1))),
    MachineInstruction::new("RXSBG", &RIE_F_5, 846, UNI.with(since_zs(4))),
    MachineInstruction::new("RXSBGT", &RIE_F_5, 846, UNI.with(since_zs(4))),
    MachineInstruction::new("S", &RX_A_2_UX, 872, UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    MachineInstruction::new("SAC", &S_1_U, 1102, UNI.with(ESA).with(XA).with(_370).with(since_zs(1))),
    MachineInstruction::new("SACF", &S_1_U, 1102, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("SAL", &S_0, 1224, UNI.with(ESA).with(XA).with(since_zs(1))),
    MachineInstruction::new("SAM24", &E_0, 854, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("SAM31", &E_0, 854, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("SAM64", &E_0, 854, UNI.with(since_zs(1))),
    MachineInstruction::new("SAR", &RRE_2, 854, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("SCCTR", &RRE_2, 46, UNI.with(since_zs(4))),
    MachineInstruction::new("SCHM", &S_0, 1225, UNI.with(ESA).with(XA).with(since_zs(1))),
    MachineInstruction::new("SCK", &S_1_U, 1103, UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    MachineInstruction::new("SCKC", &S_1_U, 1104, UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    MachineInstruction::new("SCKPF", &E_0, 1105, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("SD", &RX_A_2_UX, 1428, UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    MachineInstruction::new("SDB", &RXE_2, 1470, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("SDBR", &RRE_2, 1470, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("SDR", &RR_2, 1428, UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    MachineInstruction::new("SDTR", &RRF_A_3, 1527, UNI.with(since_zs(3))),
    MachineInstruction::new("SDTRA", &RRF_A_4, 1527, UNI.with(since_zs(5))),
    MachineInstruction::new("SE", &RX_A_2_UX, 1428, UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    MachineInstruction::new("SEB", &RXE_2, 1470, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("SEBR", &RRE_2, 1470, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("SELFHR", &RRF_A_4, 864, UNI.with(since_zs(9))),
    MachineInstruction::new("SELGR", &RRF_A_4, 864, UNI.with(since_zs(9))),
    MachineInstruction::new("SELR", &RRF_A_4, 864, UNI.with(since_zs(9))),
    MachineInstruction::new("SER", &RR_2, 1428, UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    MachineInstruction::new("SFASR", &RRE_1, 976, UNI.with(since_zs(3))),
    MachineInstruction::new("SFPC", &RRE_1, 975, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("SG", &RXY_A_2, 872, UNI.with(since_zs(1))),
    MachineInstruction::new("SGF", &RXY_A_2, 872, UNI.with(since_zs(1))),
    MachineInstruction::new("SGFR", &RRE_2, 871, UNI.with(since_zs(1))),
    MachineInstruction::new("SGH", &RXY_A_2, 872, UNI.with(since_zs(8))),
    MachineInstruction::new("SGR", &RRE_2, 871, UNI.with(since_zs(1))),
    MachineInstruction::new("SGRK", &RRF_A_3, 872, UNI.with(since_zs(5))),
    MachineInstruction::new("SH", &RX_A_2_UX, 872, UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    MachineInstruction::new("SHHHR", &RRF_A_3, 873, UNI.with(since_zs(5))),
    MachineInstruction::new("SHHLR", &RRF_A_3, 873, UNI.with(since_zs(5))),
    MachineInstruction::new("SHY", &RXY_A_2, 872, UNI.with(since_zs(2))),
    MachineInstruction::new("SIE", &S_1_U, 7, UNI.with(ESA).with(XA).with(since_zs(1))),
    MachineInstruction::new("SIGP", &RS_A_3, 1115, UNI.with(ESA).with(XA).with(_370).with(since_zs(1))),
    MachineInstruction::new("SIO", &S_1_U, 129, UNI.with(_370).with(DOS)),
    MachineInstruction::new("SIOF", &S_1_U, 129, UNI.with(_370).with(DOS)),
    MachineInstruction::new("SL", &RX_A_2_UX, 874, UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    MachineInstruction::new("SLA", &RS_A_2, 856, UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    MachineInstruction::new("SLAG", &RSY_A_3, 856, UNI.with(since_zs(1))),
    MachineInstruction::new("SLAK", &RSY_A_3, 856, UNI.with(since_zs(5))),
    MachineInstruction::new("SLB", &RXY_A_2, 875, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("SLBG", &RXY_A_2, 875, UNI.with(since_zs(1))),
    MachineInstruction::new("SLBGR", &RRE_2, 875, UNI.with(since_zs(1))),
    MachineInstruction::new("SLBR", &RRE_2, 875, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("SLDA", &RS_A_2, 855, UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    MachineInstruction::new("SLDL", &RS_A_2, 856, UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    MachineInstruction::new("SLDT", &RXF_3_X, 1526, UNI.with(since_zs(3))),
    MachineInstruction::new("SLFI", &RIL_A_2, 874, UNI.with(since_zs(3))),
    MachineInstruction::new("SLG", &RXY_A_2, 874, UNI.with(since_zs(1))),
    MachineInstruction::new("SLGF", &RXY_A_2, 874, UNI.with(since_zs(1))),
    MachineInstruction::new("SLGFI", &RIL_A_2, 874, UNI.with(since_zs(3))),
    MachineInstruction::new("SLGFR", &RRE_2, 873, UNI.with(since_zs(1))),
    MachineInstruction::new("SLGR", &RRE_2, 873, UNI.with(since_zs(1))),
    MachineInstruction::new("SLGRK", &RRF_A_3, 873, UNI.with(since_zs(5))),
    MachineInstruction::new("SLHHHR", &RRF_A_3, 875, UNI.with(since_zs(5))),
    MachineInstruction::new("SLHHLR", &RRF_A_3, 875, UNI.with(since_zs(5))),
    MachineInstruction::new("SLL", &RS_A_2, 857, UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    MachineInstruction::new("SLLG", &RSY_A_3, 857, UNI.with(since_zs(1))),
    MachineInstruction::new("SLLK", &RSY_A_3, 857, UNI.with(since_zs(5))),
    MachineInstruction::new("SLR", &RR_2, 873, UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    MachineInstruction::new("SLRK", &RRF_A_3, 873, UNI.with(since_zs(5))),
    MachineInstruction::new("SLXT", &RXF_3_X, 1526, UNI.with(since_zs(3))),
    MachineInstruction::new("SLY", &RXY_A_2, 874, UNI.with(since_zs(2))),
    MachineInstruction::new("SORTL", &RRE_2, 19, UNI.with(since_zs(9))),
    MachineInstruction::new("SP", &SS_B_2, 927, UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    MachineInstruction::new("SPCTR", &RRE_2, 47, UNI.with(since_zs(4))),
    MachineInstruction::new("SPKA", &S_1_U, 1106, UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    MachineInstruction::new("SPM", &RR_1, 855, UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    MachineInstruction::new("SPT", &S_1_U, 1105, UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    MachineInstruction::new("SPX", &S_1_U, 1105, UNI.with(ESA).with(XA).with(_370).with(since_zs(1))),
    MachineInstruction::new("SQD", &RXE_2, 1427, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("SQDB", &RXE_2, 1470, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("SQDBR", &RRE_2, 1470, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("SQDR", &RRE_2, 1427, UNI.with(ESA).with(XA).with(since_zs(1))),
    MachineInstruction::new("SQE", &RXE_2, 1427, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("SQEB", &RXE_2, 1470, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("SQEBR", &RRE_2, 1470, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("SQER", &RRE_2, 1427, UNI.with(ESA).with(XA).with(since_zs(1))),
    MachineInstruction::new("SQXBR", &RRE_2, 1470, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("SQXR", &RRE_2, 1427, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("SR", &RR_2, 871, UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    MachineInstruction::new("SRA", &RS_A_2, 859, UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    MachineInstruction::new("SRAG", &RSY_A_3, 859, UNI.with(since_zs(1))),
    MachineInstruction::new("SRAK", &RSY_A_3, 859, UNI.with(since_zs(5))),
    MachineInstruction::new("SRDA", &RS_A_2, 858, UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    MachineInstruction::new("SRDL", &RS_A_2, 858, UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    MachineInstruction::new("SRDT", &RXF_3_X, 1526, UNI.with(since_zs(3))),
    MachineInstruction::new("SRK", &RRF_A_3, 871, UNI.with(since_zs(5))),
    MachineInstruction::new("SRL", &RS_A_2, 860, UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    MachineInstruction::new("SRLG", &RSY_A_3, 860, UNI.with(since_zs(1))),
    MachineInstruction::new("SRLK", &RSY_A_3, 860, UNI.with(since_zs(5))),
    MachineInstruction::new("SRNM", &S_1_U, 975, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("SRNMB", &S_1_U, 975, UNI.with(since_zs(5))),
    MachineInstruction::new("SRNMT", &S_1_U, 975, UNI.with(since_zs(3))),
    MachineInstruction::new("SRP", &SS_C_3, 926, UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    MachineInstruction::new("SRST", &RRE_2, 850, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("SRSTU", &RRE_2, 852, UNI.with(since_zs(2))),
    MachineInstruction::new("SRXT", &RXF_3_X, 1526, UNI.with(since_zs(3))),
    MachineInstruction::new("SSAIR", &RRE_1, 1107, UNI.with(since_zs(2))),
    MachineInstruction::new("SSAR", &RRE_1, 1107, UNI.with(ESA).with(XA).with(_370).with(since_zs(1))),
    MachineInstruction::new("SSCH", &S_1_U, 1227, UNI.with(ESA).with(XA).with(since_zs(1))),
    MachineInstruction::new("SSK", &RR_2, 304, UNI.with(_370).with(DOS)),
    MachineInstruction::new("SSKE", &RRF_C_3_OPT, 1112, UNI.with(ESA).with(XA).with(_370).with(since_zs(1))),
    MachineInstruction::new("SSM", &SI_1, 1115, UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    MachineInstruction::new("ST", &RX_A_2_UX, 860, UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    MachineInstruction::new("STAM", &RS_A_3, 861, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("STAMY", &RSY_A_3, 861, UNI.with(since_zs(2))),
    MachineInstruction::new("STAP", &S_1_U, 1118, UNI.with(ESA).with(XA).with(_370).with(since_zs(1))),
    MachineInstruction::new("STC", &RX_A_2_UX, 862, UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    MachineInstruction::new("STCH", &RXY_A_2, 862, UNI.with(since_zs(5))),
    MachineInstruction::new("STCK", &S_1_U, 863, UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    MachineInstruction::new("STCKC", &S_1_U, 1117, UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    MachineInstruction::new("STCKE", &S_1_U, 864, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("STCKF", &S_1_U, 863, UNI.with(since_zs(3))),
    MachineInstruction::new("STCM", &RS_B_3, 862, UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    MachineInstruction::new("STCMH", &RSY_B_3_US, 862, UNI.with(since_zs(1))),
    MachineInstruction::new("STCMY", &RSY_B_3_US, 862, UNI.with(since_zs(2))),
    MachineInstruction::new("STCPS", &S_1_U, 1228, UNI.with(ESA).with(XA).with(since_zs(1))),
    MachineInstruction::new("STCRW", &S_1_U, 1229, UNI.with(ESA).with(XA).with(since_zs(1))),
    MachineInstruction::new("STCTG", &RSY_A_3, 1117, UNI.with(since_zs(1))),
    MachineInstruction::new("STCTL", &RS_A_3, 1117, UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    MachineInstruction::new("STCY", &RXY_A_2, 862, UNI.with(since_zs(2))),
    MachineInstruction::new("STD", &RX_A_2_UX, 976, UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    MachineInstruction::new("STDY", &RXY_A_2, 977, UNI.with(since_zs(2))),
    MachineInstruction::new("STE", &RX_A_2_UX, 976, UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    MachineInstruction::new("STEY", &RXY_A_2, 977, UNI.with(since_zs(2))),
    MachineInstruction::new("STFH", &RXY_A_2, 868, UNI.with(since_zs(5))),
    MachineInstruction::new("STFL", &S_1_U, 1120, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("STFLE", &S_1_S, 866, UNI.with(since_zs(3))),
    MachineInstruction::new("STFPC", &S_1_U, 977, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("STG", &RXY_A_2, 861, UNI.with(since_zs(1))),
    MachineInstruction::new("STGRL", &RIL_B_2, 861, UNI.with(since_zs(4))),
    MachineInstruction::new("STGSC", &RXY_A_2, 867, UNI.with(since_zs(8))),
    MachineInstruction::new("STH", &RX_A_2_UX, 867, UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    MachineInstruction::new("STHH", &RXY_A_2, 868, UNI.with(since_zs(5))),
    MachineInstruction::new("STHRL", &RIL_B_2, 868, UNI.with(since_zs(4))),
    MachineInstruction::new("STHY", &RXY_A_2, 868, UNI.with(since_zs(2))),
    MachineInstruction::new("STIDC", &S_1_U, 129, UNI.with(_370).with(DOS)),
    MachineInstruction::new("STIDP", &S_1_U, 1118, UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    MachineInstruction::new("STM", &RS_A_3, 869, UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    MachineInstruction::new("STMG", &RSY_A_3, 869, UNI.with(since_zs(1))),
    MachineInstruction::new("STMH", &RSY_A_3, 869, UNI.with(since_zs(1))),
    MachineInstruction::new("STMY", &RSY_A_3, 869, UNI.with(since_zs(2))),
    MachineInstruction::new("STNSM", &SI_2_U, 1146, UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    MachineInstruction::new("STOC", &RSY_B_3_SU, 869, UNI.with(since_zs(5))),
    MachineInstruction::new("STOCFH", &RSY_B_3_SU, 870, UNI.with(since_zs(7))),
    MachineInstruction::new("STOCG", &RSY_B_3_SU, 869, UNI.with(since_zs(5))),
    MachineInstruction::new("STOSM", &SI_2_U, 1146, UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    MachineInstruction::new("STPQ", &RXY_A_2, 870, UNI.with(since_zs(1))),
    MachineInstruction::new("STPT", &S_1_U, 1120, UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    MachineInstruction::new("STPX", &S_1_U, 1121, UNI.with(ESA).with(XA).with(_370).with(since_zs(1))),
    MachineInstruction::new("STRAG", &SSE_2, 1121, UNI.with(since_zs(1))),
    MachineInstruction::new("STRL", &RIL_B_2, 861, UNI.with(since_zs(4))),
    MachineInstruction::new("STRV", &RXY_A_2, 871, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("STRVG", &RXY_A_2, 871, UNI.with(since_zs(1))),
    MachineInstruction::new("STRVH", &RXY_A_2, 871, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("STSCH", &S_1_U, 1230, UNI.with(ESA).with(XA).with(since_zs(1))),
    MachineInstruction::new("STSI", &S_1_U, 1122, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("STURA", &RRE_2, 1147, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("STURG", &RRE_2, 1147, UNI.with(since_zs(1))),
    MachineInstruction::new("STY", &RXY_A_2, 861, UNI.with(since_zs(2))),
    MachineInstruction::new("SU", &RX_A_2_UX, 1429, UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    MachineInstruction::new("SUR", &RR_2, 1429, UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    MachineInstruction::new("SVC", &I_1, 876, UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    MachineInstruction::new("SW", &RX_A_2_UX, 1429, UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    MachineInstruction::new("SWR", &RR_2, 1429, UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    MachineInstruction::new("SXBR", &RRE_2, 1470, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("SXR", &RR_2, 1428, UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    MachineInstruction::new("SXTR", &RRF_A_3, 1527, UNI.with(since_zs(3))),
    MachineInstruction::new("SXTRA", &RRF_A_4, 1527, UNI.with(since_zs(5))),
    MachineInstruction::new("SY", &RXY_A_2, 872, UNI.with(since_zs(2))),
    MachineInstruction::new("TABORT", &S_1_U, 878, UNI.with(since_zs(6))),
    MachineInstruction::new("TAM", &E_0, 876, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("TAR", &RRE_2, 1147, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("TB", &RRE_2, 1149, UNI.with(ESA).with(XA).with(_370).with(since_zs(1))),
    MachineInstruction::new("TBDR", &RRF_E_3, 956, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("TBEDR", &RRF_E_3, 956, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("TBEGIN", &SIL_2_S, 879, UNI.with(since_zs(6))),
    MachineInstruction::new("TBEGINC", &SIL_2_S, 883, UNI.with(since_zs(6))),
    MachineInstruction::new("TCDB", &RXE_2, 1471, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("TCEB", &RXE_2, 1471, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("TCH", &S_1_U, 384, UNI.with(_370).with(DOS)),
    MachineInstruction::new("TCXB", &RXE_2, 1471, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("TDCDT", &RXE_2, 1528, UNI.with(since_zs(3))),
    MachineInstruction::new("TDCET", &RXE_2, 1528, UNI.with(since_zs(3))),
    MachineInstruction::new("TDCXT", &RXE_2, 1528, UNI.with(since_zs(3))),
    MachineInstruction::new("TDGDT", &RXE_2, 1529, UNI.with(since_zs(3))),
    MachineInstruction::new("TDGET", &RXE_2, 1529, UNI.with(since_zs(3))),
    MachineInstruction::new("TDGXT", &RXE_2, 1529, UNI.with(since_zs(3))),
    MachineInstruction::new("TEND", &S_0, 885, UNI.with(since_zs(6))),
    MachineInstruction::new("THDER", &RRE_2, 955, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("THDR", &RRE_2, 955, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("TIO", &S_1_U, 385, UNI.with(_370).with(DOS)),
    MachineInstruction::new("TM", &SI_2_U, 877, UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    MachineInstruction::new("TMH", &RI_A_2_U, 877, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("TMHH", &RI_A_2_U, 877, UNI.with(since_zs(1))),
    MachineInstruction::new("TMHL", &RI_A_2_U, 877, UNI.with(since_zs(1))),
    MachineInstruction::new("TML", &RI_A_2_U, 877, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("TMLH", &RI_A_2_U, 877, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("TMLL", &RI_A_2_U, 877, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("TMY", &SIY_2_SU, 877, UNI.with(since_zs(2))),
    MachineInstruction::new("TP", &RSL_A_1, 928, UNI.with(since_zs(1))),
    MachineInstruction::new("TPEI", &RRE_2, 1151, UNI.with(since_zs(8))),
    MachineInstruction::new("TPI", &S_1_U, 1231, UNI.with(ESA).with(XA).with(since_zs(1))),
    MachineInstruction::new("TPROT", &SSE_2, 1152, UNI.with(ESA).with(XA).with(_370).with(since_zs(1))),
    MachineInstruction::new("TR", &SS_A_2_U, 886, UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    MachineInstruction::new("TRACE", &RS_A_3, 1155, UNI.with(ESA).with(XA).with(since_zs(1))),
    MachineInstruction::new("TRACG", &RSY_A_3, 1155, UNI.with(since_zs(1))),
    MachineInstruction::new("TRAP2", &E_0, 1156, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("TRAP4", &S_1_U, 1156, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("TRE", &RRE_2, 893, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("TROO", &RRF_C_3_OPT, 895, UNI.with(since_zs(1))),
    MachineInstruction::new("TROT", &RRF_C_3_OPT, 895, UNI.with(since_zs(1))),
    MachineInstruction::new("TRT", &SS_A_2_U, 887, UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    MachineInstruction::new("TRTE", &RRF_C_3_OPT, 887, UNI.with(since_zs(4))),
    MachineInstruction::new("TRTO", &RRF_C_3_OPT, 895, UNI.with(since_zs(1))),
    MachineInstruction::new("TRTR", &SS_A_2_U, 892, UNI.with(since_zs(2))),
    MachineInstruction::new("TRTRE", &RRF_C_3_OPT, 888, UNI.with(since_zs(4))),
    MachineInstruction::new("TRTT", &RRF_C_3_OPT, 895, UNI.with(since_zs(1))),
    MachineInstruction::new("TS", &SI_1, 876, UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    MachineInstruction::new("TSCH", &S_1_U, 1232, UNI.with(ESA).with(XA).with(since_zs(1))),
    MachineInstruction::new("UNPK", &SS_B_2, 900, UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    MachineInstruction::new("UNPKA", &SS_A_2_U, 901, UNI.with(since_zs(1))),
    MachineInstruction::new("UNPKU", &SS_A_2_U, 902, UNI.with(since_zs(1))),
    MachineInstruction::new("UPT", &E_0, 903, UNI.with(ESA).with(XA).with(since_zs(1))),
    MachineInstruction::new("VA", &VRR_C_4, 1557, UNI.with(ESA).with(XA).with(_370).with(since_zs(7))),
    MachineInstruction::new("VAC", &VRR_D_5, 1558, UNI.with(since_zs(7))),
    MachineInstruction::new("VACC", &VRR_C_4, 1558, UNI.with(since_zs(7))),
    MachineInstruction::new("VACCC", &VRR_D_5, 1559, UNI.with(since_zs(7))),
    MachineInstruction::new("VACD", &RI_A_2_U, 0, ESA.with(XA).with(_370)),
    MachineInstruction::new("VACE", &RI_A_2_U, 0, ESA.with(XA).with(_370)),
    MachineInstruction::new("VACRS", &RRE_2, 0, ESA.with(XA).with(_370)),
    MachineInstruction::new("VACSV", &RRE_2, 0, ESA.with(XA).with(_370)),
    MachineInstruction::new("VAD", &RI_A_2_U, 0, ESA.with(XA).with(_370)),
    MachineInstruction::new("VADS", &RI_A_2_U, 0, ESA.with(XA).with(_370)),
    MachineInstruction::new("VAE", &RI_A_2_U, 0, ESA.with(XA).with(_370)),
    MachineInstruction::new("VAES", &RI_A_2_U, 0, ESA.with(XA).with(_370)),
    MachineInstruction::new("VAP", &VRI_F_5, 1643, UNI.with(since_zs(8))),
    MachineInstruction::new("VAS", &RI_A_2_U, 0, ESA.with(XA).with(_370)),
    MachineInstruction::new("VAVG", &VRR_C_4, 1560, UNI.with(since_zs(7))),
    MachineInstruction::new("VAVGL", &VRR_C_4, 1560, UNI.with(since_zs(7))),
    MachineInstruction::new("VBPERM", &VRR_C_3, 1536, UNI.with(since_zs(8))),
    MachineInstruction::new("VC", &RI_A_2_U, 0, ESA.with(XA).with(_370)),
    MachineInstruction::new("VCD", &RI_A_2_U, 0, ESA.with(XA).with(_370)),
    MachineInstruction::new("VCDS", &RI_A_2_U, 0, ESA.with(XA).with(_370)),
    MachineInstruction::new("VCE", &RI_A_2_U, 0, ESA.with(XA).with(_370)),
    MachineInstruction::new("VCEQ", &VRR_B_5, 1561, UNI.with(ESA).with(XA).with(_370).with(since_zs(7))),
    MachineInstruction::new("VCES", &RI_A_2_U, 0, ESA.with(XA).with(_370)),
    MachineInstruction::new("VCFPL", &VRR_A_5, 1643, UNI.with(since_zs(9))),
    MachineInstruction::new("VCFPS", &VRR_A_5, 1641, UNI.with(since_zs(9))),
    MachineInstruction::new("VCH", &VRR_B_5, 1562, UNI.with(since_zs(7))),
    MachineInstruction::new("VCHL", &VRR_B_5, 1563, UNI.with(since_zs(7))),
    MachineInstruction::new("VCKSM", &VRR_C_3, 1560, UNI.with(since_zs(7))),
    MachineInstruction::new("VCLFP", &VRR_A_5, 1611, UNI.with(since_zs(9))),
    MachineInstruction::new("VCLGD", &VRR_A_5, 1611, UNI.with(since_zs(7))),
    MachineInstruction::new("VCLZ", &VRR_A_3, 1564, UNI.with(since_zs(7))),
    MachineInstruction::new("VCOVM", &RRE_2, 0, ESA.with(XA).with(_370)),
    MachineInstruction::new("VCP", &VRR_H_3, 1644, UNI.with(since_zs(8))),
    MachineInstruction::new("VCS", &RI_A_2_U, 0, ESA.with(XA).with(_370)),
    MachineInstruction::new("VCSFP", &VRR_A_5, 1644, UNI.with(since_zs(9))),
    MachineInstruction::new("VCTZ", &VRR_A_3, 1564, UNI.with(since_zs(7))),
    MachineInstruction::new("VCVB", &VRR_I_3, 1645, UNI.with(since_zs(8))),
    MachineInstruction::new("VCVBG", &VRR_I_3, 1645, UNI.with(since_zs(8))),
    MachineInstruction::new("VCVD", &VRI_I_4, 1646, UNI.with(since_zs(8))),
    MachineInstruction::new("VCVDG", &VRI_I_4, 1646, UNI.with(since_zs(8))),
    MachineInstruction::new("VCVM", &RRE_2, 0, ESA.with(XA).with(_370)),
    MachineInstruction::new("VCZVM", &RRE_2, 0, ESA.with(XA).with(_370)),
    MachineInstruction::new("VDD", &RI_A_2_U, 0, ESA.with(XA).with(_370)),
    MachineInstruction::new("VDDS", &RI_A_2_U, 0, ESA.with(XA).with(_370)),
    MachineInstruction::new("VDE", &RI_A_2_U, 0, ESA.with(XA).with(_370)),
    MachineInstruction::new("VDES", &RI_A_2_U, 0, ESA.with(XA).with(_370)),
    MachineInstruction::new("VDP", &VRI_F_5, 1648, UNI.with(since_zs(8))),
    MachineInstruction::new("VEC", &VRR_A_3, 1561, UNI.with(since_zs(7))),
    MachineInstruction::new("VECL", &VRR_A_3, 1561, UNI.with(since_zs(7))),
    MachineInstruction::new("VERIM", &VRI_D_5, 1576, UNI.with(since_zs(7))),
    MachineInstruction::new("VERLL", &VRS_A_4, 1575, UNI.with(since_zs(7))),
    MachineInstruction::new("VERLLV", &VRR_C_4, 1575, UNI.with(since_zs(7))),
    MachineInstruction::new("VESL", &VRS_A_4, 1577, UNI.with(since_zs(7))),
    MachineInstruction::new("VESLV", &VRR_C_4, 1577, UNI.with(since_zs(7))),
    MachineInstruction::new("VESRA", &VRS_A_4, 1577, UNI.with(since_zs(7))),
    MachineInstruction::new("VESRAV", &VRR_C_4, 1577, UNI.with(since_zs(7))),
    MachineInstruction::new("VESRL", &VRS_A_4, 1578, UNI.with(since_zs(7))),
    MachineInstruction::new("VESRLV", &VRR_C_4, 1578, UNI.with(since_zs(7))),
    MachineInstruction::new("VFA", &VRR_C_5, 1595, UNI.with(since_zs(7))),
    MachineInstruction::new("VFAE", &VRR_B_5_OPT, 1585, UNI.with(since_zs(7))),
    MachineInstruction::new("VFCE", &VRR_C_6, 1601, UNI.with(since_zs(7))),
    MachineInstruction::new("VFCH", &VRR_C_6, 1603, UNI.with(since_zs(7))),
    MachineInstruction::new("VFCHE", &VRR_C_6, 1605, UNI.with(since_zs(7))),
    MachineInstruction::new("VFD", &VRR_C_5, 1613, UNI.with(since_zs(7))),
    MachineInstruction::new("VFEE", &VRR_B_5_OPT, 1587, UNI.with(since_zs(7))),
    MachineInstruction::new("VFENE", &VRR_B_5_OPT, 1588, UNI.with(since_zs(7))),
    MachineInstruction::new("VFI", &VRR_A_5, 1615, UNI.with(since_zs(7))),
    MachineInstruction::new("VFLL", &VRR_A_4, 1617, UNI.with(since_zs(8))),
    MachineInstruction::new("VFLR", &VRR_A_5, 1618, UNI.with(since_zs(8))),
    MachineInstruction::new("VFM", &VRR_C_5, 1631, UNI.with(since_zs(7))),
    MachineInstruction::new("VFMA", &VRR_E_6, 1633, UNI.with(since_zs(7))),
    MachineInstruction::new("VFMAX", &VRR_C_6, 1619, UNI.with(since_zs(8))),
    MachineInstruction::new("VFMIN", &VRR_C_6, 1625, UNI.with(since_zs(8))),
    MachineInstruction::new("VFMS", &VRR_E_6, 1633, UNI.with(since_zs(7))),
    MachineInstruction::new("VFNMA", &VRR_E_6, 1633, UNI.with(since_zs(8))),
    MachineInstruction::new("VFNMS", &VRR_E_6, 1633, UNI.with(since_zs(8))),
    MachineInstruction::new("VFPSO", &VRR_A_5, 1635, UNI.with(since_zs(7))),
    MachineInstruction::new("VFS", &VRR_C_5, 1637, UNI.with(since_zs(7))),
    MachineInstruction::new("VFSQ", &VRR_A_4, 1636, UNI.with(since_zs(7))),
    MachineInstruction::new("VFTCI", &VRI_E_5, 1638, UNI.with(since_zs(7))),
    MachineInstruction::new("VGBM", &VRI_A_2, 1537, UNI.with(since_zs(7))),
    MachineInstruction::new("VGEF", &VRV_3, 1536, UNI.with(since_zs(7))),
    MachineInstruction::new("VGEG", &VRV_3, 1536, UNI.with(since_zs(7))),
    MachineInstruction::new("VGFM", &VRR_C_4, 1565, UNI.with(since_zs(7))),
    MachineInstruction::new("VGFMA", &VRR_D_5, 1566, UNI.with(since_zs(7))),
    MachineInstruction::new("VGM", &VRI_B_4, 1537, UNI.with(since_zs(7))),
    MachineInstruction::new("VISTR", &VRR_A_4_OPT, 1589, UNI.with(since_zs(7))),
    MachineInstruction::new("VL", &VRX_3_OPT, 1538, UNI.with(ESA).with(XA).with(_370).with(since_zs(7))),
    MachineInstruction::new("VLBB", &VRX_3, 1542, UNI.with(since_zs(7))),
    MachineInstruction::new("VLBIX", &RRE_2, 0, ESA.with(XA).with(_370)),
    MachineInstruction::new("VLBR", &VRX_3, 1563, UNI.with(since_zs(9))),
    MachineInstruction::new("VLBRREP", &VRX_3, 1562, UNI.with(since_zs(9))),
    MachineInstruction::new("VLC", &VRR_A_3, 1566, UNI.with(since_zs(7))),
    MachineInstruction::new("VLCVM", &RRE_2, 0, ESA.with(XA).with(_370)),
    MachineInstruction::new("VLD", &RI_A_2_U, 0, ESA.with(XA).with(_370)),
    MachineInstruction::new("VLEB", &VRX_3, 1538, UNI.with(since_zs(7))),
    MachineInstruction::new("VLEBRG", &VRX_3, 1561, UNI.with(since_zs(9))),
    MachineInstruction::new("VLEBRH", &VRX_3, 1561, UNI.with(since_zs(9))),
    MachineInstruction::new("VLEF", &VRX_3, 1539, UNI.with(since_zs(7))),
    MachineInstruction::new("VLEG", &VRX_3, 1539, UNI.with(since_zs(7))),
    MachineInstruction::new("VLEH", &VRX_3, 1539, UNI.with(since_zs(7))),
    MachineInstruction::new("VLEIB", &VRI_A_3, 1539, UNI.with(since_zs(7))),
    MachineInstruction::new("VLEIF", &VRI_A_3, 1539, UNI.with(since_zs(7))),
    MachineInstruction::new("VLEIG", &VRI_A_3, 1539, UNI.with(since_zs(7))),
    MachineInstruction::new("VLEIH", &VRI_A_3, 1539, UNI.with(since_zs(7))),
    MachineInstruction::new("VLELD", &RRE_2, 0, ESA.with(XA).with(_370)),
    MachineInstruction::new("VLELE", &RRE_2, 0, ESA.with(XA).with(_370)),
    MachineInstruction::new("VLER", &VRX_3, 1564, UNI.with(ESA).with(XA).with(_370).with(since_zs(9))),
    MachineInstruction::new("VLGV", &VRS_C_4, 1539, UNI.with(since_zs(7))),
    MachineInstruction::new("VLH", &RI_A_2_U, 0, ESA.with(XA).with(_370)),
    MachineInstruction::new("VLI", &RRE_2, 0, ESA.with(XA).with(_370)),
    MachineInstruction::new("VLID", &RRE_2, 0, ESA.with(XA).with(_370)),
    MachineInstruction::new("VLINT", &RI_A_2_U, 0, ESA.with(XA).with(_370)),
    MachineInstruction::new("VLIP", &VRI_H_3, 1649, UNI.with(since_zs(8))),
    MachineInstruction::new("VLL", &VRS_B_3, 1543, UNI.with(since_zs(7))),
    MachineInstruction::new("VLLEBRZ", &VRX_3, 1562, UNI.with(since_zs(9))),
    MachineInstruction::new("VLLEZ", &VRX_3, 1540, UNI.with(since_zs(7))),
    MachineInstruction::new("VLM", &VRS_A_4_OPT, 1541, UNI.with(ESA).with(XA).with(_370).with(since_zs(7))),
    MachineInstruction::new("VLMD", &RI_A_2_U, 0, ESA.with(XA).with(_370)),
    MachineInstruction::new("VLP", &VRR_A_3, 1566, UNI.with(since_zs(7))),
    MachineInstruction::new("VLR", &VRR_A_2, 1538, UNI.with(ESA).with(XA).with(_370).with(since_zs(7))),
    MachineInstruction::new("VLREP", &VRX_3, 1538, UNI.with(since_zs(7))),
    MachineInstruction::new("VLRL", &VSI_3, 1541, UNI.with(since_zs(8))),
    MachineInstruction::new("VLRLR", &VRS_D_3, 1541, UNI.with(since_zs(8))),
    MachineInstruction::new("VLVCA", &RRE_2, 0, ESA.with(XA).with(_370)),
    MachineInstruction::new("VLVCU", &RRE_2, 0, ESA.with(XA).with(_370)),
    MachineInstruction::new("VLVG", &VRS_B_4, 1543, UNI.with(since_zs(7))),
    MachineInstruction::new("VLVGP", &VRR_F_3, 1543, UNI.with(since_zs(7))),
    MachineInstruction::new("VLVM", &RRE_2, 0, ESA.with(XA).with(_370)),
    MachineInstruction::new("VLY", &RI_A_2_U, 0, ESA.with(XA).with(_370)),
    MachineInstruction::new("VLYD", &RI_A_2_U, 0, ESA.with(XA).with(_370)),
    MachineInstruction::new("VM", &RI_A_2_U, 0, ESA.with(XA).with(_370)),
    MachineInstruction::new("VMAD", &RI_A_2_U, 0, ESA.with(XA).with(_370)),
    MachineInstruction::new("VMADS", &RI_A_2_U, 0, ESA.with(XA).with(_370)),
    MachineInstruction::new("VMAE", &VRR_D_5, 1569, UNI.with(ESA).with(XA).with(_370).with(since_zs(7))),
    MachineInstruction::new("VMAES", &RI_A_2_U, 0, ESA.with(XA).with(_370)),
    MachineInstruction::new("VMAH", &VRR_D_5, 1569, UNI.with(since_zs(7))),
    MachineInstruction::new("VMAL", &VRR_D_5, 1568, UNI.with(since_zs(7))),
    MachineInstruction::new("VMALE", &VRR_D_5, 1569, UNI.with(since_zs(7))),
    MachineInstruction::new("VMALH", &VRR_D_5, 1569, UNI.with(since_zs(7))),
    MachineInstruction::new("VMALO", &VRR_D_5, 1570, UNI.with(since_zs(7))),
    MachineInstruction::new("VMAO", &VRR_D_5, 1570, UNI.with(since_zs(7))),
    MachineInstruction::new("VMCD", &RI_A_2_U, 0, ESA.with(XA).with(_370)),
    MachineInstruction::new("VMCE", &RI_A_2_U, 0, ESA.with(XA).with(_370)),
    MachineInstruction::new("VMD", &RI_A_2_U, 0, ESA.with(XA).with(_370)),
    MachineInstruction::new("VMDS", &RI_A_2_U, 0, ESA.with(XA).with(_370)),
    MachineInstruction::new("VME", &VRR_C_4, 1572, UNI.with(ESA).with(XA).with(_370).with(since_zs(7))),
    MachineInstruction::new("VMES", &RI_A_2_U, 0, ESA.with(XA).with(_370)),
    MachineInstruction::new("VMH", &VRR_C_4, 1570, UNI.with(since_zs(7))),
    MachineInstruction::new("VML", &VRR_C_4, 1571, UNI.with(since_zs(7))),
    MachineInstruction::new("VMLE", &VRR_C_4, 1572, UNI.with(since_zs(7))),
    MachineInstruction::new("VMLH", &VRR_C_4, 1571, UNI.with(since_zs(7))),
    MachineInstruction::new("VMLO", &VRR_C_4, 1572, UNI.with(since_zs(7))),
    MachineInstruction::new("VMN", &VRR_C_4, 1567, UNI.with(since_zs(7))),
    MachineInstruction::new("VMNL", &VRR_C_4, 1568, UNI.with(since_zs(7))),
    MachineInstruction::new("VMNSD", &RRE_2, 0, ESA.with(XA).with(_370)),
    MachineInstruction::new("VMNSE", &RRE_2, 0, ESA.with(XA).with(_370)),
    MachineInstruction::new("VMO", &VRR_C_4, 1572, UNI.with(since_zs(7))),
    MachineInstruction::new("VMP", &VRI_F_5, 1650, UNI.with(since_zs(8))),
    MachineInstruction::new("VMRH", &VRR_C_4, 1544, UNI.with(since_zs(7))),
    MachineInstruction::new("VMRL", &VRR_C_4, 1544, UNI.with(since_zs(7))),
    MachineInstruction::new("VMRRS", &RRE_2, 0, ESA.with(XA).with(_370)),
    MachineInstruction::new("VMRSV", &RRE_2, 0, ESA.with(XA).with(_370)),
    MachineInstruction::new("VMS", &RI_A_2_U, 0, ESA.with(XA).with(_370)),
    MachineInstruction::new("VMSD", &RI_A_2_U, 0, ESA.with(XA).with(_370)),
    MachineInstruction::new("VMSDS", &RI_A_2_U, 0, ESA.with(XA).with(_370)),
    MachineInstruction::new("VMSE", &RI_A_2_U, 0, ESA.with(XA).with(_370)),
    MachineInstruction::new("VMSES", &RI_A_2_U, 0, ESA.with(XA).with(_370)),
    MachineInstruction::new("VMSL", &VRR_D_6, 1573, UNI.with(since_zs(8))),
    MachineInstruction::new("VMSP", &VRI_F_5, 1651, UNI.with(since_zs(8))),
    MachineInstruction::new("VMX", &VRR_C_4, 1567, UNI.with(since_zs(7))),
    MachineInstruction::new("VMXAD", &RRE_2, 0, ESA.with(XA).with(_370)),
    MachineInstruction::new("VMXAE", &RRE_2, 0, ESA.with(XA).with(_370)),
    MachineInstruction::new("VMXL", &VRR_C_4, 1567, UNI.with(since_zs(7))),
    MachineInstruction::new("VMXSE", &RRE_2, 0, ESA.with(XA).with(_370)),
    MachineInstruction::new("VN", &VRR_C_3, 1559, UNI.with(ESA).with(XA).with(_370).with(since_zs(7))),
    MachineInstruction::new("VNC", &VRR_C_3, 1559, UNI.with(since_zs(7))),
    MachineInstruction::new("VNN", &VRR_C_3, 1574, UNI.with(since_zs(8))),
    MachineInstruction::new("VNO", &VRR_C_3, 1574, UNI.with(since_zs(7))),
    MachineInstruction::new("VNS", &RI_A_2_U, 0, ESA.with(XA).with(_370)),
    MachineInstruction::new("VNVM", &RRE_2, 0, ESA.with(XA).with(_370)),
    MachineInstruction::new("VNX", &VRR_C_3, 1574, UNI.with(since_zs(8))),
    MachineInstruction::new("VO", &VRR_C_3, 1574, UNI.with(ESA).with(XA).with(_370).with(since_zs(7))),
    MachineInstruction::new("VOC", &VRR_C_3, 1575, UNI.with(since_zs(8))),
    MachineInstruction::new("VOS", &RI_A_2_U, 0, ESA.with(XA).with(_370)),
    MachineInstruction::new("VOVM", &RRE_2, 0, ESA.with(XA).with(_370)),
    MachineInstruction::new("VPDI", &VRR_C_4, 1547, UNI.with(since_zs(7))),
    MachineInstruction::new("VPERM", &VRR_E_4, 1547, UNI.with(since_zs(7))),
    MachineInstruction::new("VPK", &VRR_C_4, 1545, UNI.with(since_zs(7))),
    MachineInstruction::new("VPKLS", &VRR_B_5, 1546, UNI.with(since_zs(7))),
    MachineInstruction::new("VPKS", &VRR_B_5, 1545, UNI.with(since_zs(7))),
    MachineInstruction::new("VPKZ", &VSI_3, 1652, UNI.with(since_zs(8))),
    MachineInstruction::new("VPOPCT", &VRR_A_3, 1575, UNI.with(since_zs(7))),
    MachineInstruction::new("VPSOP", &VRI_G_5_U, 1653, UNI.with(since_zs(8))),
    MachineInstruction::new("VRCL", &RRE_2, 0, ESA.with(XA).with(_370)),
    MachineInstruction::new("VREP", &VRI_C_4, 1547, UNI.with(since_zs(7))),
    MachineInstruction::new("VREPI", &VRI_A_3, 1548, UNI.with(since_zs(7))),
    MachineInstruction::new("VRP", &VRI_F_5, 1654, UNI.with(since_zs(8))),
    MachineInstruction::new("VRRS", &RRE_2, 0, ESA.with(XA).with(_370)),
    MachineInstruction::new("VRSV", &RRE_2, 0, ESA.with(XA).with(_370)),
    MachineInstruction::new("VRSVC", &RRE_2, 0, ESA.with(XA).with(_370)),
    MachineInstruction::new("VS", &VRR_C_4, 1580, UNI.with(ESA).with(XA).with(_370).with(since_zs(7))),
    MachineInstruction::new("VSBCBI", &VRR_D_5, 1582, UNI.with(since_zs(7))),
    MachineInstruction::new("VSBI", &VRR_D_5, 1581, UNI.with(since_zs(7))),
    MachineInstruction::new("VSCBI", &VRR_C_4, 1581, UNI.with(since_zs(7))),
    MachineInstruction::new("VSCEF", &VRV_3, 1548, UNI.with(since_zs(7))),
    MachineInstruction::new("VSCEG", &VRV_3, 1548, UNI.with(since_zs(7))),
    MachineInstruction::new("VSD", &RI_A_2_U, 0, ESA.with(XA).with(_370)),
    MachineInstruction::new("VSDP", &VRI_F_5, 1656, UNI.with(since_zs(8))),
    MachineInstruction::new("VSDS", &RI_A_2_U, 0, ESA.with(XA).with(_370)),
    MachineInstruction::new("VSE", &RI_A_2_U, 0, ESA.with(XA).with(_370)),
    MachineInstruction::new("VSEG", &VRR_A_3, 1549, UNI.with(since_zs(7))),
    MachineInstruction::new("VSEL", &VRR_E_4, 1549, UNI.with(since_zs(7))),
    MachineInstruction::new("VSES", &RI_A_2_U, 0, ESA.with(XA).with(_370)),
    MachineInstruction::new("VSL", &VRR_C_3, 1579, UNI.with(since_zs(7))),
    MachineInstruction::new("VSLB", &VRR_C_3, 1579, UNI.with(since_zs(7))),
    MachineInstruction::new("VSLD", &VRI_D_4, 1607, UNI.with(since_zs(9))),
    MachineInstruction::new("VSLDB", &VRI_D_4, 1579, UNI.with(since_zs(7))),
    MachineInstruction::new("VSLL", &RRE_2, 0, ESA.with(XA).with(_370)),
    MachineInstruction::new("VSP", &VRI_F_5, 1658, UNI.with(since_zs(8))),
    MachineInstruction::new("VSPSD", &RRE_2, 0, ESA.with(XA).with(_370)),
    MachineInstruction::new("VSRA", &VRR_C_3, 1579, UNI.with(since_zs(7))),
    MachineInstruction::new("VSRAB", &VRR_C_3, 1580, UNI.with(since_zs(7))),
    MachineInstruction::new("VSRD", &VRI_D_4, 1608, UNI.with(since_zs(9))),
    MachineInstruction::new("VSRL", &VRR_C_3, 1580, UNI.with(ESA).with(XA).with(_370).with(since_zs(7))),
    MachineInstruction::new("VSRLB", &VRR_C_3, 1580, UNI.with(since_zs(7))),
    MachineInstruction::new("VSRP", &VRI_G_5_S, 1657, UNI.with(since_zs(8))),
    MachineInstruction::new("VSRRS", &RRE_2, 0, ESA.with(XA).with(_370)),
    MachineInstruction::new("VSRSV", &RRE_2, 0, ESA.with(XA).with(_370)),
    MachineInstruction::new("VSS", &RI_A_2_U, 0, ESA.with(XA).with(_370)),
    MachineInstruction::new("VST", &VRX_3_OPT, 1550, UNI.with(ESA).with(XA).with(_370).with(since_zs(7))),
    MachineInstruction::new("VSTBR", &VRX_3, 1576, UNI.with(since_zs(9))),
    MachineInstruction::new("VSTD", &RI_A_2_U, 0, ESA.with(XA).with(_370)),
    MachineInstruction::new("VSTEB", &VRX_3, 1550, UNI.with(since_zs(7))),
    MachineInstruction::new("VSTEBRF", &VRX_3, 1576, UNI.with(since_zs(9))),
    MachineInstruction::new("VSTEBRG", &VRX_3, 1576, UNI.with(since_zs(9))),
    MachineInstruction::new("VSTEBRH", &VRX_3, 1576, UNI.with(since_zs(9))),
    MachineInstruction::new("VSTEF", &VRX_3, 1550, UNI.with(since_zs(7))),
    MachineInstruction::new("VSTEG", &VRX_3, 1550, UNI.with(since_zs(7))),
    MachineInstruction::new("VSTEH", &VRX_3, 1550, UNI.with(since_zs(7))),
    MachineInstruction::new("VSTER", &VRX_3, 1578, UNI.with(since_zs(9))),
    MachineInstruction::new("VSTH", &RI_A_2_U, 0, ESA.with(XA).with(_370)),
    MachineInstruction::new("VSTI", &RRE_2, 0, ESA.with(XA).with(_370)),
    MachineInstruction::new("VSTID", &RRE_2, 0, ESA.with(XA).with(_370)),
    MachineInstruction::new("VSTK", &RI_A_2_U, 0, ESA.with(XA).with(_370)),
    MachineInstruction::new("VSTKD", &RI_A_2_U, 0, ESA.with(XA).with(_370)),
    MachineInstruction::new("VSTL", &VRS_B_3, 1552, UNI.with(since_zs(7))),
    MachineInstruction::new("VSTM", &VRS_A_4_OPT, 1551, UNI.with(ESA).with(XA).with(_370).with(since_zs(7))),
    MachineInstruction::new("VSTMD", &RI_A_2_U, 0, ESA.with(XA).with(_370)),
    MachineInstruction::new("VSTRC", &VRR_D_6_OPT, 1590, UNI.with(since_zs(7))),
    MachineInstruction::new("VSTRL", &VSI_3, 1551, UNI.with(since_zs(8))),
    MachineInstruction::new("VSTRLR", &VRS_D_3, 1551, UNI.with(since_zs(8))),
    MachineInstruction::new("VSTRS", &VRR_D_6_OPT, 1622, UNI.with(since_zs(9))),
    MachineInstruction::new("VSTVM", &RRE_2, 0, ESA.with(XA).with(_370)),
    MachineInstruction::new("VSTVP", &RRE_2, 0, ESA.with(XA).with(_370)),
    MachineInstruction::new("VSUM", &VRR_C_4, 1583, UNI.with(since_zs(7))),
    MachineInstruction::new("VSUMG", &VRR_C_4, 1582, UNI.with(since_zs(7))),
    MachineInstruction::new("VSUMQ", &VRR_C_4, 1583, UNI.with(since_zs(7))),
    MachineInstruction::new("VSVMM", &RRE_2, 0, ESA.with(XA).with(_370)),
    MachineInstruction::new("VTM", &VRR_A_2, 1584, UNI.with(since_zs(7))),
    MachineInstruction::new("VTP", &VRR_G_1, 1660, UNI.with(since_zs(8))),
    MachineInstruction::new("VTVM", &RRE_2, 0, ESA.with(XA).with(_370)),
    MachineInstruction::new("VUPH", &VRR_A_3, 1552, UNI.with(since_zs(7))),
    MachineInstruction::new("VUPKZ", &VSI_3, 1660, UNI.with(since_zs(8))),
    MachineInstruction::new("VUPL", &VRR_A_3, 1553, UNI.with(since_zs(7))),
    MachineInstruction::new("VUPLH", &VRR_A_3, 1553, UNI.with(since_zs(7))),
    MachineInstruction::new("VUPLL", &VRR_A_3, 1554, UNI.with(since_zs(7))),
    MachineInstruction::new("VX", &VRR_C_3, 1565, UNI.with(ESA).with(XA).with(_370).with(since_zs(7))),
    MachineInstruction::new("VXELD", &RRE_2, 0, ESA.with(XA).with(_370)),
    MachineInstruction::new("VXELE", &RRE_2, 0, ESA.with(XA).with(_370)),
    MachineInstruction::new("VXS", &RI_A_2_U, 0, ESA.with(XA).with(_370)),
    MachineInstruction::new("VXVC", &RRE_2, 0, ESA.with(XA).with(_370)),
    MachineInstruction::new("VXVM", &RRE_2, 0, ESA.with(XA).with(_370)),
    MachineInstruction::new("VXVMM", &RRE_2, 0, ESA.with(XA).with(_370)),
    MachineInstruction::new("VZPSD", &RRE_2, 0, ESA.with(XA).with(_370)),
    MachineInstruction::new("WFC", &VRR_A_4, 1599, UNI.with(since_zs(7))),
    MachineInstruction::new("WFK", &VRR_A_4, 1600, UNI.with(since_zs(7))),
    MachineInstruction::new("X", &RX_A_2_UX, 738, UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    MachineInstruction::new("XC", &SS_A_2_S, 739, UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    MachineInstruction::new("XG", &RXY_A_2, 738, UNI.with(since_zs(1))),
    MachineInstruction::new("XGR", &RRE_2, 738, UNI.with(since_zs(1))),
    MachineInstruction::new("XGRK", &RRF_A_3, 738, UNI.with(since_zs(5))),
    MachineInstruction::new("XI", &SI_2_U, 739, UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    MachineInstruction::new("XIHF", &RIL_A_2, 740, UNI.with(since_zs(3))),
    MachineInstruction::new("XILF", &RIL_A_2, 740, UNI.with(since_zs(3))),
    MachineInstruction::new("XIY", &SIY_2_SU, 739, UNI.with(since_zs(2))),
    MachineInstruction::new("XR", &RR_2, 738, UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
    MachineInstruction::new("XRK", &RRF_A_3, 738, UNI.with(since_zs(5))),
    MachineInstruction::new("XSCH", &S_0, 1215, UNI.with(ESA).with(since_zs(1))),
    MachineInstruction::new("XY", &RXY_A_2, 738, UNI.with(since_zs(2))),
    MachineInstruction::new("ZAP", &SS_B_2, 928, UNI.with(ESA).with(XA).with(_370).with(DOS).with(since_zs(1))),
];
