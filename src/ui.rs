pub fn render_index(date: &str, public_count: usize) -> String {
    INDEX_HTML
        .replace("{{DATE}}", date)
        .replace("{{PUBLIC_COUNT}}", &public_count.to_string())
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Habit Tracker</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #f2f6f5;
      --bg-2: #cfe3da;
      --ink: #23302b;
      --accent: #2f9e68;
      --accent-2: #27504a;
      --muted: #6d7a74;
      --card: rgba(255, 255, 255, 0.9);
      --shadow: 0 24px 60px rgba(39, 80, 74, 0.16);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #e4efe7 60%, #f4f8f2 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: start center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(900px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 24px;
    }

    header h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(2rem, 4vw, 2.6rem);
      margin: 0;
    }

    .subtitle {
      margin: 4px 0 0;
      color: var(--muted);
    }

    .habit-list {
      display: grid;
      gap: 16px;
    }

    .habit {
      background: white;
      border-radius: 18px;
      padding: 18px 20px;
      border: 1px solid rgba(39, 80, 74, 0.08);
      display: grid;
      gap: 10px;
    }

    .habit .top {
      display: flex;
      justify-content: space-between;
      align-items: baseline;
      gap: 12px;
    }

    .habit .title {
      font-size: 1.15rem;
      font-weight: 600;
    }

    .habit .category {
      font-size: 0.8rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: var(--muted);
    }

    .habit .owner {
      font-size: 0.85rem;
      color: var(--muted);
    }

    .streak {
      color: var(--accent-2);
      font-weight: 600;
      white-space: nowrap;
    }

    .bar {
      background: rgba(39, 80, 74, 0.1);
      border-radius: 999px;
      height: 10px;
      overflow: hidden;
    }

    .bar .fill {
      background: var(--accent);
      height: 100%;
      border-radius: 999px;
      transition: width 300ms ease;
    }

    .percent-label {
      font-size: 0.8rem;
      color: var(--muted);
    }

    .empty {
      text-align: center;
      color: var(--muted);
      padding: 24px 0;
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Habit Tracker</h1>
      <p class="subtitle">{{DATE}} &middot; {{PUBLIC_COUNT}} shared habits</p>
    </header>
    <section class="habit-list" id="habit-list">
      <p class="empty">Loading shared habits&hellip;</p>
    </section>
  </main>
  <script>
    function habitCard(habit) {
      const card = document.createElement('article');
      card.className = 'habit';

      const top = document.createElement('div');
      top.className = 'top';
      const title = document.createElement('span');
      title.className = 'title';
      title.textContent = habit.title;
      const streak = document.createElement('span');
      streak.className = 'streak';
      streak.textContent = `${habit.current_streak} day streak`;
      top.append(title, streak);

      const category = document.createElement('span');
      category.className = 'category';
      category.textContent = habit.category || 'General';

      const owner = document.createElement('span');
      owner.className = 'owner';
      owner.textContent = habit.owner_name || habit.owner_email || 'Anonymous';

      const bar = document.createElement('div');
      bar.className = 'bar';
      const fill = document.createElement('div');
      fill.className = 'fill';
      fill.style.width = `${habit.trailing_30_percent}%`;
      bar.append(fill);

      const label = document.createElement('span');
      label.className = 'percent-label';
      label.textContent = `${habit.trailing_30_percent}% completed in the last 30 days`;

      card.append(top, category, owner, bar, label);
      return card;
    }

    async function loadHabits() {
      const list = document.getElementById('habit-list');
      try {
        const res = await fetch('/api/habits/public');
        if (!res.ok) throw new Error(`status ${res.status}`);
        const habits = await res.json();
        list.replaceChildren();
        if (habits.length === 0) {
          const empty = document.createElement('p');
          empty.className = 'empty';
          empty.textContent = 'No shared habits yet.';
          list.append(empty);
          return;
        }
        for (const habit of habits) {
          list.append(habitCard(habit));
        }
      } catch (err) {
        list.replaceChildren();
        const failed = document.createElement('p');
        failed.className = 'empty';
        failed.textContent = 'Could not load habits.';
        list.append(failed);
      }
    }

    loadHabits();
  </script>
</body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_substitutes_placeholders() {
        let html = render_index("2024-06-10", 3);
        assert!(html.contains("2024-06-10"));
        assert!(html.contains("3 shared habits"));
        assert!(!html.contains("{{DATE}}"));
        assert!(!html.contains("{{PUBLIC_COUNT}}"));
    }
}
