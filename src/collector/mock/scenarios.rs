//! Pre-built mock filesystem scenarios for testing.
//!
//! These scenarios provide realistic `/proc` states: ordinary processes,
//! processes another user owns, unlimited limits and a missing `file-max`.

use super::filesystem::MockFs;

/// Renders a `/proc/[pid]/limits` table with the given open-files limits.
///
/// Values are written as the kernel does: a decimal or `unlimited`.
pub fn limits_table(soft: &str, hard: &str) -> String {
    format!(
        "\
Limit                     Soft Limit           Hard Limit           Units
Max cpu time              unlimited            unlimited            seconds
Max file size             unlimited            unlimited            bytes
Max data size             unlimited            unlimited            bytes
Max stack size            8388608              unlimited            bytes
Max core file size        0                    unlimited            bytes
Max resident set          unlimited            unlimited            bytes
Max processes             63229                63229                processes
Max open files            {:<20} {:<20} files
Max locked memory         8388608              8388608              bytes
Max address space         unlimited            unlimited            bytes
Max file locks            unlimited            unlimited            locks
Max pending signals       63229                63229                signals
Max msgqueue size         819200               819200               bytes
Max nice priority         0                    0
Max realtime priority     0                    0
Max realtime timeout      unlimited            unlimited            us
",
        soft, hard
    )
}

impl MockFs {
    /// Adds the non-process entries every `/proc` has, so enumeration has
    /// something to skip over.
    fn add_proc_noise(&mut self) {
        self.add_file("/proc/uptime", "12345.67 98765.43\n");
        self.add_file("/proc/loadavg", "0.15 0.10 0.05 1/150 1234\n");
        self.add_dir("/proc/net");
        self.add_dir("/proc/1a2b");
    }

    /// Creates a typical system with a few processes.
    ///
    /// Includes: init (PID 1), a daemon (PID 812) and a shell (PID 1337).
    pub fn typical_system() -> Self {
        let mut fs = Self::new();
        fs.add_proc_noise();
        fs.add_file("/proc/sys/fs/file-max", "1048576\n");

        fs.add_process(1, &limits_table("1024", "524288"), 64);
        fs.add_process(812, &limits_table("1024", "4096"), 50);
        fs.add_process(1337, &limits_table("1024", "1024"), 3);
        fs
    }

    /// Creates a system with one readable process (PID 100) and one owned
    /// by another user whose `fd` directory cannot be listed (PID 200).
    pub fn with_inaccessible_process() -> Self {
        let mut fs = Self::new();
        fs.add_proc_noise();
        fs.add_file("/proc/sys/fs/file-max", "1048576\n");

        fs.add_process(100, &limits_table("256", "1024"), 10);
        fs.add_process(200, &limits_table("1024", "4096"), 5);
        fs.deny("/proc/200/fd");
        fs
    }

    /// Creates a system where PID 300 runs without an open files limit.
    pub fn with_unlimited_process() -> Self {
        let mut fs = Self::new();
        fs.add_file("/proc/sys/fs/file-max", "1000\n");

        fs.add_process(300, &limits_table("unlimited", "unlimited"), 25);
        fs.add_process(301, &limits_table("1024", "unlimited"), 4);
        fs
    }

    /// Creates a typical system whose `/proc/sys/fs/file-max` is missing,
    /// as inside some containers.
    pub fn without_file_max() -> Self {
        let mut fs = Self::typical_system();
        fs.remove("/proc/sys");
        fs
    }

    /// Creates a system with a process whose limits file is truncated and
    /// a zombie whose `fd` directory is already gone.
    pub fn with_broken_processes() -> Self {
        let mut fs = Self::new();
        fs.add_file("/proc/sys/fs/file-max", "1048576\n");

        fs.add_process(10, &limits_table("1024", "4096"), 7);
        fs.add_dir("/proc/11");
        fs.add_file(
            "/proc/11/limits",
            "Limit                     Soft Limit           Hard Limit           Units     \n",
        );
        fs.add_dir("/proc/11/fd");
        fs.add_dir("/proc/12");
        fs.add_file("/proc/12/limits", limits_table("1024", "4096"));
        fs
    }
}
