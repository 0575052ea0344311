//! 터미널 출력 포맷팅 유틸리티
//!
//! 서버 부트스트랩(저장소 연결, 레지스트리 초기화, 인덱스 생성) 진행 상황을
//! 박스 제목과 트리 형태로 출력합니다.
//!
//! ```text
//! ╔══════════════════════════════════════════════════╗
//! ║         🔄 INITIALIZING SERVICE REGISTRY         ║
//! ╚══════════════════════════════════════════════════╝
//! → Step 1: Creating Repository instances
//!    ├─ order_repository: ✓ Created
//! ✓ Step 1: Repository instances created (4 items)
//! ```

const BOX_WIDTH: usize = 50;

/// 박스 형태로 둘러싸인 제목을 출력합니다. 텍스트는 중앙 정렬됩니다.
pub fn print_boxed_title(title: &str) {
    let border = "═".repeat(BOX_WIDTH);

    println!("╔{}╗", border);
    println!("║{:^49}║", title);
    println!("╚{}╝", border);
}

/// `→ Step 1: ...`
pub fn print_step_start(step: u8, description: &str) {
    println!("→ Step {}: {}", step, description);
}

/// `✓ Step 1: ... (N items)`
pub fn print_step_complete(step: u8, description: &str, count: usize) {
    println!("✓ Step {}: {} ({} items)", step, description, count);
}

/// 들여쓰기된 하위 작업 상태
pub fn print_sub_task(name: &str, status: &str) {
    println!("   ├─ {}: {}", name, status);
}

/// 레지스트리 초기화 요약
pub fn print_final_summary(repos: usize, services: usize) {
    println!();
    print_boxed_title("🎉 SERVICE REGISTRY INITIALIZED");
    println!("   📦 Repositories: {}", repos);
    println!("   🔧 Services: {}", services);
    println!("   🚀 Total Components: {}", repos + services);
    println!();
}

/// MongoDB 인덱스 준비 완료 표시
pub fn print_index_ready(collection: &str, index: &str) {
    print_sub_task(collection, &format!("🗂️  index `{}` ready", index));
}
