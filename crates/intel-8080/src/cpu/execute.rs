//! Instruction execution for the 8080.

use emu_core::Bus;

use crate::alu::{self, AluResult};
use crate::decode::Op;
use crate::flags::{ACF, F_MASK, PF, SF, ZF};

use super::I8080;

/// Flag-update mask for INR/DCR: everything except carry.
const INR_MASK: u8 = SF | ZF | ACF | PF;

impl I8080 {
    /// Perform the effect of one decoded instruction.
    ///
    /// Operand bytes are consumed through the PC-advancing fetch helpers,
    /// so a branch that is not taken still ends up past its two address
    /// bytes. `step` never forwards the fault variants here.
    pub(super) fn execute(&mut self, bus: &mut impl Bus, op: Op) {
        match op {
            Op::Nop => {}

            // Data transfer. None of these touch the flags.
            Op::Mov(dst, src) => {
                let value = self.read_reg(bus, src);
                self.write_reg(bus, dst, value);
            }
            Op::Mvi(dst) => {
                let value = self.fetch(bus);
                self.write_reg(bus, dst, value);
            }
            Op::Lxi(pair) => {
                let value = self.fetch_word(bus);
                self.set_pair(pair, value);
            }
            Op::Stax(pair) => {
                bus.write(self.pair(pair), self.regs.a);
            }
            Op::Ldax(pair) => {
                self.regs.a = bus.read(self.pair(pair));
            }
            Op::Sta => {
                let addr = self.fetch_word(bus);
                bus.write(addr, self.regs.a);
            }
            Op::Lda => {
                let addr = self.fetch_word(bus);
                self.regs.a = bus.read(addr);
            }
            Op::Shld => {
                let addr = self.fetch_word(bus);
                bus.write(addr, self.regs.l);
                bus.write(addr.wrapping_add(1), self.regs.h);
            }
            Op::Lhld => {
                let addr = self.fetch_word(bus);
                self.regs.l = bus.read(addr);
                self.regs.h = bus.read(addr.wrapping_add(1));
            }

            // Arithmetic and logic into the accumulator, all five flags.
            Op::Add(src) => {
                let value = self.read_reg(bus, src);
                self.acc_op(alu::add8(self.regs.a, value, false));
            }
            Op::Adc(src) => {
                let value = self.read_reg(bus, src);
                self.acc_op(alu::add8(self.regs.a, value, self.regs.carry()));
            }
            Op::Sub(src) => {
                let value = self.read_reg(bus, src);
                self.acc_op(alu::sub8(self.regs.a, value, false));
            }
            Op::Sbb(src) => {
                let value = self.read_reg(bus, src);
                self.acc_op(alu::sub8(self.regs.a, value, self.regs.carry()));
            }
            Op::Ana(src) => {
                let value = self.read_reg(bus, src);
                self.acc_op(alu::and8(self.regs.a, value));
            }
            Op::Xra(src) => {
                let value = self.read_reg(bus, src);
                self.acc_op(alu::xor8(self.regs.a, value));
            }
            Op::Ora(src) => {
                let value = self.read_reg(bus, src);
                self.acc_op(alu::or8(self.regs.a, value));
            }
            Op::Adi => {
                let value = self.fetch(bus);
                self.acc_op(alu::add8(self.regs.a, value, false));
            }
            Op::Aci => {
                let value = self.fetch(bus);
                self.acc_op(alu::add8(self.regs.a, value, self.regs.carry()));
            }
            Op::Sui => {
                let value = self.fetch(bus);
                self.acc_op(alu::sub8(self.regs.a, value, false));
            }
            Op::Ani => {
                let value = self.fetch(bus);
                self.acc_op(alu::and8(self.regs.a, value));
            }
            Op::Ori => {
                let value = self.fetch(bus);
                self.acc_op(alu::or8(self.regs.a, value));
            }

            // Increment/decrement: carry is left alone.
            Op::Inr(reg) => {
                let result = alu::inc8(self.read_reg(bus, reg));
                self.write_reg(bus, reg, result.value);
                self.apply_flags(INR_MASK, result.flags);
            }
            Op::Dcr(reg) => {
                let result = alu::dec8(self.read_reg(bus, reg));
                self.write_reg(bus, reg, result.value);
                self.apply_flags(INR_MASK, result.flags);
            }

            // Pair arithmetic: INX/DCX touch no flags, DAD only carry.
            Op::Inx(pair) => {
                self.set_pair(pair, self.pair(pair).wrapping_add(1));
            }
            Op::Dcx(pair) => {
                self.set_pair(pair, self.pair(pair).wrapping_sub(1));
            }
            Op::Dad(pair) => {
                let (sum, carry) = alu::add16(self.regs.hl(), self.pair(pair));
                self.regs.set_hl(sum);
                self.set_carry(carry);
            }

            // Rotates: CY takes the bit shifted out, nothing else moves.
            Op::Rlc => {
                let bit7 = self.regs.a >> 7;
                self.regs.a = self.regs.a << 1 | bit7;
                self.set_carry(bit7 != 0);
            }
            Op::Rrc => {
                let bit0 = self.regs.a & 1;
                self.regs.a = self.regs.a >> 1 | bit0 << 7;
                self.set_carry(bit0 != 0);
            }
            Op::Ral => {
                let old_carry = u8::from(self.regs.carry());
                let bit7 = self.regs.a >> 7;
                self.regs.a = self.regs.a << 1 | old_carry;
                self.set_carry(bit7 != 0);
            }
            Op::Rar => {
                let old_carry = u8::from(self.regs.carry());
                let bit0 = self.regs.a & 1;
                self.regs.a = self.regs.a >> 1 | old_carry << 7;
                self.set_carry(bit0 != 0);
            }

            Op::Daa => {
                let result = alu::daa(self.regs.a, self.regs.carry(), self.regs.aux_carry());
                self.acc_op(result);
            }
            Op::Cma => {
                self.regs.a = !self.regs.a;
            }
            Op::Stc => {
                self.set_carry(true);
            }
            Op::Cmc => {
                let carry = self.regs.carry();
                self.set_carry(!carry);
            }

            // Control transfer: the target is built low byte first from
            // the two operand bytes.
            Op::Jmp => {
                self.regs.pc = self.fetch_word(bus);
            }
            Op::Jnz => {
                let target = self.fetch_word(bus);
                if !self.regs.zero() {
                    self.regs.pc = target;
                }
            }
            Op::Jz => {
                let target = self.fetch_word(bus);
                if self.regs.zero() {
                    self.regs.pc = target;
                }
            }

            Op::Unsupported | Op::Undefined => unreachable!(),
        }
    }

    /// Store an ALU result in the accumulator and update all five flags.
    fn acc_op(&mut self, result: AluResult) {
        self.regs.a = result.value;
        self.apply_flags(F_MASK, result.flags);
    }
}
