use crate::core::cutoff::ShiftMode;
use crate::core::potentials::PairParams;

/// The compute-kernel collaborator's configuration surface.
///
/// This crate is a synchronous producer of kernel inputs: for every unique
/// type pair it pushes the transformed parameter block, the cutoff and
/// onset radii, and the active shift mode. The kernel itself (native,
/// possibly accelerator-resident) is outside this crate; parameters for a
/// pair are stable once the corresponding setter returns.
pub trait ComputeKernel {
    fn set_params(&mut self, i: usize, j: usize, params: PairParams);

    fn set_rcut(&mut self, i: usize, j: usize, r_cut: f64);

    fn set_ron(&mut self, i: usize, j: usize, r_on: f64);

    fn set_shift_mode(&mut self, mode: ShiftMode);

    /// Pushes one pair's tabulated samples. Only the tabulated potential
    /// calls this.
    fn set_table(
        &mut self,
        i: usize,
        j: usize,
        energies: &[f64],
        forces: &[f64],
        r_min: f64,
        r_max: f64,
    );
}
